use clap::Parser;
use itemset_dict::{parse, DatasetGenerator, GeneratorConfig, Pipeline, PipelineConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mines a dataset, builds the code dictionary, and reports the compression
/// ratio.
///
/// Usage:
///   cargo run --example pipeline -- --input baskets.txt --min-support 0.05
///   cargo run --example pipeline -- --transactions 10000 --items 50 --seed 1
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Whitespace-delimited transactions, one per line. Generates synthetic
    /// data when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = 0.1)]
    min_support: f64,

    #[arg(long, default_value_t = 1)]
    workers: usize,

    #[arg(long, default_value_t = 1_000)]
    transactions: usize,

    #[arg(long, default_value_t = 20)]
    items: usize,

    #[arg(long, default_value_t = 1)]
    min_len: usize,

    #[arg(long, default_value_t = 8)]
    max_len: usize,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let data = match &args.input {
        Some(path) => parse::read_transactions(BufReader::new(File::open(path)?))?,
        None => {
            let mut config =
                GeneratorConfig::new(args.transactions, args.items, args.min_len, args.max_len);
            config.seed = args.seed;
            DatasetGenerator::new(config)?.generate()
        }
    };

    let config = PipelineConfig::new(args.min_support).with_workers(args.workers);
    let report = Pipeline::new(config).run(&data)?;
    let stats = report.stats;

    println!("Transactions: {}", stats.num_transactions);
    println!("Original size: {}", stats.original_size);
    println!("Compressed size: {}", stats.compressed_size);
    println!("Dictionary entries: {}", stats.dictionary_size);
    println!("Compression ratio: {:.4}", report.ratio()?);

    Ok(())
}
