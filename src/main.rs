//! bank-predict - single-shot price prediction
//!
//! Loads one bank's fitted scaler and model, predicts a price from the
//! feature payload and writes exactly one JSON line to stdout.
//!
//! # Usage
//! ```sh
//! bank-predict KBANK '{"open_price": 10, "high": 11, ...}'
//! bank-predict --list-banks
//! ```
//!
//! # Environment Variables
//! - `ARTIFACT_DIR` - Directory with `{bank}_scaler.json` / `{bank}_model.json` (default: ./models)
//! - `ARTIFACT_VALIDATION` - Check artifact provenance metadata (default: true)
//! - `RUST_LOG` - Log filter, logs go to stderr

use anyhow::{Context, Result};
use bank_predict::application::prediction_service::PredictionService;
use bank_predict::config::Config;
use bank_predict::domain::ports::ArtifactStore;
use bank_predict::infrastructure::artifact_store::FileArtifactStore;
use clap::Parser;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bank code selecting the artifact pair
    #[arg(required_unless_present = "list_banks")]
    bank_code: Option<String>,

    /// JSON object with the 18 feature values
    #[arg(required_unless_present = "list_banks")]
    input_json: Option<String>,

    /// Artifact directory (overrides ARTIFACT_DIR)
    #[arg(long)]
    artifact_dir: Option<PathBuf>,

    /// List banks with a complete artifact pair and exit
    #[arg(long, conflicts_with_all = ["bank_code", "input_json"])]
    list_banks: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the result line only
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = args.artifact_dir {
        config.artifact_dir = dir;
    }
    info!(
        "Configuration loaded: ArtifactDir={:?}, Validation={}",
        config.artifact_dir, config.artifact_validation
    );

    let store = FileArtifactStore::new(config.artifact_dir, config.artifact_validation);

    if args.list_banks {
        let banks = store
            .registered_banks()
            .context("Failed to read artifact registry")?;
        let codes: Vec<String> = banks.iter().map(|b| b.to_string()).collect();
        println!("{}", json!({ "status": "success", "banks": codes }));
        return Ok(());
    }

    let (Some(bank_code), Some(input_json)) = (args.bank_code, args.input_json) else {
        anyhow::bail!("Both BANK_CODE and INPUT_JSON are required");
    };

    let payload: Value =
        serde_json::from_str(&input_json).context("Failed to parse input JSON payload")?;

    let service = PredictionService::new(store);
    let result = service.predict(&bank_code, &payload);

    println!("{}", result.to_json_line()?);
    Ok(())
}
