use std::path::PathBuf;

use anyhow::{Context, Result};
use bbsgen::engine::BitExtraction;
use bbsgen::rng::SeedRng;
use bbsgen::stream::DEFAULT_CHUNK_SIZE;
use bbsgen::{BlumBlumShub, DEFAULT_PRIME_FLOOR, GeneratorConfig, OutputFormat, StreamEmitter};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Universal Statistical tests need at least 387 840 bits; default to a
/// comfortable margin above that.
const DEFAULT_BITS: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "bbsgen")]
#[command(about = "Generate Blum Blum Shub bitstreams for statistical test suites")]
#[command(version)]
struct Args {
    /// Both primes are chosen strictly above this value
    #[arg(long, default_value_t = DEFAULT_PRIME_FLOOR)]
    floor: u64,

    /// Number of bits to generate
    #[arg(short, long, default_value_t = DEFAULT_BITS)]
    bits: u64,

    /// Output encoding: text (one '0'/'1' per bit) or binary (packed, MSB first)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Destination file, created or truncated
    #[arg(short, long, default_value = "bbs_random_data.txt")]
    output: PathBuf,

    /// Print the first N bytes of the stream before generating (0 disables)
    #[arg(long, default_value_t = 4)]
    preview: usize,

    /// Output bytes per write
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Fixed randomness seed, for reproducible parameters
    #[arg(long)]
    seed: Option<u64>,

    /// Extract the parity of the state instead of its least significant bit
    #[arg(long, default_value_t = false)]
    parity: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = GeneratorConfig {
        prime_floor: args.floor,
        extraction: if args.parity {
            BitExtraction::Parity
        } else {
            BitExtraction::LeastSignificant
        },
        ..GeneratorConfig::default()
    };

    let mut rng = match args.seed {
        Some(seed) => SeedRng::from_seed(seed),
        None => SeedRng::from_os(),
    };

    let mut bbs = BlumBlumShub::with_rng(&config, &mut rng).context("building BBS generator")?;

    println!("-- Generated parameters --");
    println!("{}", bbs.parameters());

    if args.preview > 0 {
        println!();
        println!("First {} bytes:", args.preview);
        for sample in bbs.preview(args.preview) {
            println!("{sample}");
        }
    }

    let emitter = StreamEmitter::new(args.chunk_size).context("configuring emitter")?;

    info!(
        bits = args.bits,
        format = %args.format,
        output = %args.output.display(),
        "generating bitstream"
    );

    let report = bbs
        .generate_with(&emitter, &args.output, args.bits, args.format)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!();
    println!("File written: {}", args.output.display());
    println!("Bits generated: {}", report.bits_generated);
    println!("File size: {} bytes", report.bytes_written);

    Ok(())
}
