use anyhow::{Context, Result};
use clap::Parser;
use seqlens::analyzer::SequenceAnalyzer;
use seqlens::cli::{Cli, Command, OutputFormat};
use seqlens::config::AnalyzerConfig;
use seqlens::input::{is_skippable_line, SequenceInput};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}

/// Analyze a single sequence; failure results map to exit status 1
fn run_analyze(analyzer: &mut SequenceAnalyzer, values: &[String], format: OutputFormat) -> Result<ExitCode> {
    let result = SequenceInput::from_tokens(values).analyze_with(analyzer);

    match format {
        OutputFormat::Text => print!("{}", result.to_report_string()),
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_compare(
    analyzer: &mut SequenceAnalyzer,
    first: &str,
    second: &str,
    format: OutputFormat,
) -> Result<ExitCode> {
    let a = SequenceInput::from_line(first).analyze_with(analyzer);
    let b = SequenceInput::from_line(second).analyze_with(analyzer);
    let comparison = analyzer.score_results(a, b);

    match format {
        OutputFormat::Text => print!("{}", comparison.to_report_string()),
        OutputFormat::Json => print_json(&comparison)?,
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchReport {
    results: Vec<seqlens::result::AnalysisResult>,
    history_size: usize,
    metrics: seqlens::metrics::MetricsSnapshot,
}

fn run_batch(analyzer: &mut SequenceAnalyzer, file: &Path, format: OutputFormat) -> Result<ExitCode> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read batch file: {}", file.display()))?;

    let results: Vec<_> = content
        .lines()
        .filter(|line| !is_skippable_line(line))
        .map(|line| SequenceInput::from_line(line).analyze_with(analyzer))
        .collect();
    tracing::debug!(count = results.len(), "batch analyzed");

    let history_size = analyzer.history().len();
    let metrics = analyzer.metrics();

    match format {
        OutputFormat::Text => {
            for (i, result) in results.iter().enumerate() {
                println!("=== Sequence {} ===", i + 1);
                print!("{}", result.to_report_string());
                println!();
            }
            println!("History: {} successful analyses", history_size);
            print!("{}", metrics.to_report_string());
        }
        OutputFormat::Json => print_json(&BatchReport {
            results,
            history_size,
            metrics,
        })?,
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_toml(path)?,
        None => AnalyzerConfig::default(),
    };
    let mut analyzer = SequenceAnalyzer::new(config);

    match &args.command {
        Command::Analyze { values } => run_analyze(&mut analyzer, values, args.format),
        Command::Compare { first, second } => {
            run_compare(&mut analyzer, first, second, args.format)
        }
        Command::Batch { file } => run_batch(&mut analyzer, file, args.format),
    }
}
