use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use engine::EngineSession;
use report::{ReportConfig, ReportOrchestrator};
use std::sync::Arc;
use std::time::Instant;

/// ReelReport - MovieLens rating and genre reports
#[derive(Parser)]
#[command(name = "reel-report")]
#[command(about = "Builds a rating-histogram JSON and a genre report from the MovieLens dataset", long_about = None)]
struct Cli {
    /// Movie id the rating histogram is built for
    id_film: i64,

    /// Genre label to filter the genre report by (any casing)
    genre: String,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // One configuration object, built here, passed down; the session is
    // acquired once and released when the last handle drops.
    let config = ReportConfig::default();
    let session = Arc::new(
        EngineSession::builder()
            .app_name("reel-report")
            .build()
            .context("Failed to start the engine session")?,
    );

    let start = Instant::now();
    let orchestrator = ReportOrchestrator::new(session, config);
    orchestrator
        .run(cli.id_film, &cli.genre)
        .context("Report pipeline failed")?;

    println!("{} Reports written in {:?}", "✓".green(), start.elapsed());
    Ok(())
}
