#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use anyhow::Context;
use args::Args;
use clap::Parser;
use parley_report::{ReportBuilder, TranscriptionResult};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = args.load_config()?;

    // Initialize telemetry
    let _telemetry_guard = parley_telemetry::init(config.telemetry.as_ref(), &args.log_filter)?;

    tracing::info!(
        config_path = %args.config_path().display(),
        "starting parley"
    );

    let raw = read_input(&args).await?;
    let transcription: TranscriptionResult =
        serde_json::from_str(&raw).context("failed to parse transcription result JSON")?;

    let builder = ReportBuilder::from_config(&config)?;
    let report = builder.build(&transcription, &args.question).await?;

    let mut output = serde_json::to_string_pretty(&report)?;
    output.push('\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    tracing::info!(
        transcription_id = %report.id,
        grammar_issues = report.grammar_syntax_issues.count,
        "report generated"
    );

    Ok(())
}

/// Read the transcription document from the input file or stdin
async fn read_input(args: &Args) -> anyhow::Result<String> {
    if let Some(path) = args.input_path() {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read input file {}", path.display()));
    }

    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("failed to read transcription from stdin")?;

    Ok(raw)
}
