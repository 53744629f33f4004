//! generate_protocol - Protocol codec generator
//!
//! Reads a protocol spec, derives hash-based artifact names from the given
//! seed, and writes the declarations header plus per-message encode /
//! decode / free units.

use clap::Parser;
use std::path::PathBuf;

mod run;

#[derive(Parser)]
#[command(name = "generate_protocol")]
#[command(author, version, about = "Generate wire codec sources from a protocol spec", long_about = None)]
struct Cli {
    /// Integer seed for hash-derived artifact names
    seed: i64,

    /// Path to the protocol spec (default: protocol.spec)
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Output directory for implementation units (default: proto_impl)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a JSON generator config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    run::run(&run::RunOptions {
        seed: cli.seed,
        spec: cli.spec,
        output: cli.output,
        config: cli.config,
    })
}
