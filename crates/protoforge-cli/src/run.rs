//! Generation run: load config, parse the spec, emit and write artifacts
//!
//! This is a single-pass batch tool: artifacts are written sequentially and
//! a failure never rolls back files already written for other messages.

use anyhow::{Context, Result};
use protoforge_codegen::{GeneratedSet, GeneratorConfig, generate};
use protoforge_core::{parse_spec, read_spec};
use std::fs;
use std::path::PathBuf;

/// Options collected from the command line.
pub struct RunOptions {
    pub seed: i64,
    pub spec: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Run one generation pass.
pub fn run(opts: &RunOptions) -> Result<()> {
    let config = load_config(opts)?;

    let spec_text = read_spec(&config.spec_path)?;
    let outcome = parse_spec(&spec_text);
    println!(
        "Parsed {} messages from {}",
        outcome.schema.len(),
        config.spec_path.display()
    );
    if !outcome.diagnostics.is_empty() {
        eprintln!(
            "Skipped {} unrecognized spec line(s); rerun with RUST_LOG=warn for details",
            outcome.diagnostics.len()
        );
    }

    let set = generate(&outcome.schema, &spec_text, opts.seed, &config);
    println!("Seed digest of {}: {}", opts.seed, set.seed_digest);
    println!("Header name: {}", set.header.file_name);

    let written = write_artifacts(&set, &config)?;
    for path in &written {
        println!("Generated: {}", path.display());
    }
    println!(
        "Total files generated: {} ({} .c files + 1 .h file)",
        written.len(),
        set.units.len()
    );
    println!("HEADER_FILE={}", set.header.file_name);
    Ok(())
}

/// Build the effective config: JSON file if given, then flag overrides.
fn load_config(opts: &RunOptions) -> Result<GeneratorConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            GeneratorConfig::from_json(&bytes)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(spec) = &opts.spec {
        config.spec_path = spec.clone();
    }
    if let Some(output) = &opts.output {
        config.output_dir = output.clone();
    }
    Ok(config)
}

/// Write the header and every implementation unit, returning the paths in
/// write order (header first).
fn write_artifacts(set: &GeneratedSet, config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(set.units.len() + 1);

    fs::create_dir_all(&config.header_dir).with_context(|| {
        format!(
            "Failed to create header directory: {}",
            config.header_dir.display()
        )
    })?;
    let header_path = config.header_dir.join(&set.header.file_name);
    fs::write(&header_path, &set.header.contents)
        .with_context(|| format!("Failed to write header file: {}", header_path.display()))?;
    written.push(header_path);

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;
    for unit in &set.units {
        let path = config.output_dir.join(&unit.file_name);
        fs::write(&path, &unit.contents)
            .with_context(|| format!("Failed to write unit file: {}", path.display()))?;
        written.push(path);
    }

    Ok(written)
}
