//! oav entry point.

use clap::Parser;
use oav::model::AppError;
use oav::state::{DocMeta, ViewerState};
use oav::{document, extract, logging, source, view};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Terminal viewer for OpenAPI interface documents.
#[derive(Parser, Debug)]
#[command(name = "oav")]
#[command(version)]
#[command(about = "Browse OpenAPI documents in the terminal")]
pub struct Args {
    /// Path to an OpenAPI document, JSON or YAML (reads stdin if omitted)
    pub file: Option<PathBuf>,

    /// Write the application log to this file instead of the default
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("oav: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let input = source::detect(args.file)?;
    let bytes = input.read()?;
    let doc = document::load(&bytes)?;
    let catalog = extract::extract(&doc);

    info!(
        source = %input.describe(),
        endpoints = catalog.endpoints.len(),
        components = catalog.components.len(),
        webhooks = catalog.webhooks.len(),
        "document loaded"
    );

    let meta = DocMeta {
        title: doc.info.title.clone(),
        version: doc.info.version.clone(),
    };
    let state = ViewerState::new(catalog, meta);
    view::run(state)?;

    Ok(())
}
