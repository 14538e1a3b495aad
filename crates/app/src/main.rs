//! Courier - Main Entry Point
//!
//! Converts a directory of Postman collection exports and a directory of
//! Postman environment exports into `.http` request files and `.env` files.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use courier_application::{BatchReport, ConvertBatch, ConvertBatchInput, DocumentKind};
use courier_domain::ConversionConfig;
use courier_infrastructure::{PostmanLoader, TokioFileSystem};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "courier", version, about)]
struct Cli {
    /// Directory containing Postman collection exports (*.json)
    collections_dir: PathBuf,

    /// Directory containing Postman environment exports (*.json)
    environments_dir: PathBuf,

    /// Output root for converted collections
    #[arg(
        long = "collections-out",
        env = "COURIER_COLLECTIONS_OUT",
        default_value = "parsed-collections"
    )]
    collections_out: PathBuf,

    /// Output root for converted environments
    #[arg(
        long = "environments-out",
        env = "COURIER_ENVIRONMENTS_OUT",
        default_value = "parsed-environments"
    )]
    environments_out: PathBuf,
}

impl Cli {
    fn config(&self) -> ConversionConfig {
        ConversionConfig::default()
            .with_output_roots(self.collections_out.clone(), self.environments_out.clone())
    }

    fn input(&self) -> ConvertBatchInput {
        ConvertBatchInput {
            collections_dir: self.collections_dir.clone(),
            environments_dir: self.environments_dir.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{}", err.render());
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(&cli).await {
        Ok(report) => {
            log_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<BatchReport> {
    let fs = TokioFileSystem::new();
    let batch = ConvertBatch::new(fs, PostmanLoader::new(fs), cli.config());

    batch
        .execute(&cli.input())
        .await
        .context("conversion aborted")
}

fn log_report(report: &BatchReport) {
    let stats = report.stats();

    if stats.has_failures() {
        warn!(
            partial = stats.partial,
            skipped = stats.skipped,
            "Some documents were not fully converted"
        );
    }

    info!(
        collections = report.of_kind(DocumentKind::Collection).count(),
        environments = report.of_kind(DocumentKind::Environment).count(),
        requests = stats.requests_written,
        folders = stats.folders_created,
        variables = stats.variables_written,
        "Converted {} of {} documents ({} partial, {} skipped)",
        stats.converted + stats.partial,
        stats.total(),
        stats.partial,
        stats.skipped,
    );
}
