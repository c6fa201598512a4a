//! ride-dispatch — runs a dispatch command stream against a city map.
//!
//! Reads the whole command stream (file or stdin), runs it through a
//! [`Session`](rd_dispatch::Session), and writes answers to a file or stdout.
//! Set `RUST_LOG=debug` to trace dispatch decisions on stderr.

mod app;
mod input;
mod render;


use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rd_core::SessionConfig;

use app::App;

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "ride-dispatch",
    about = "Dispatch rides over a city map from a whitespace-token command stream"
)]
struct Cli {
    /// Command stream to read (stdin if omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// File to write answers to (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// JSON session config; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Slot count of the location-name index
    #[arg(long)]
    location_capacity: Option<usize>,

    /// Slot count of the driver-name index
    #[arg(long)]
    driver_capacity: Option<usize>,
}

/// Defaults, then the `--config` file, then individual flags.
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if let Some(n) = cli.location_capacity {
        config.location_capacity = n;
    }
    if let Some(n) = cli.driver_capacity {
        config.driver_capacity = n;
    }
    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading input {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            Ok(text)
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    info!(
        "capacities: {} locations, {} drivers",
        config.location_capacity, config.driver_capacity
    );
    let text = read_input(cli.input.as_ref())?;

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut app = App::new(config, out)?;
    app.run(&text)?;

    let session = app.session();
    info!(
        "done: {} locations, {} drivers",
        session.graph().node_count(),
        session.drivers().len()
    );
    Ok(())
}
