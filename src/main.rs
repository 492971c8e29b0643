//! # chatstat CLI
//!
//! Command-line interface for the chatstat library. Reports go to stdout,
//! logs to stderr.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatstat::ChatstatError;
use chatstat::cli::{Args, ReportFormat};
use chatstat::config::AnalysisConfig;
use chatstat::core::{FilterConfig, Report, Selection, StopWords, apply_filters};
use chatstat::features::derive;
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::parser::{Grammar, create_parser};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Initialize logging based on verbosity. `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "chatstat=debug" } else { "chatstat=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let total_start = Instant::now();

    // Validate everything that can fail before reading the transcript.
    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
    }
    let export_format = args.export.as_ref().map(OutputFormat::from_path).transpose()?;
    let stop_words = match args.stop_words {
        Some(ref path) => StopWords::from_path(path)?,
        None => StopWords::bundled(),
    };

    let grammar: Grammar = args.grammar.into();
    let parser = create_parser(grammar);
    tracing::info!(input = %args.input.display(), grammar = %grammar, "parsing transcript");
    let records = derive(parser.parse(&args.input)?);
    tracing::info!(records = records.len(), "parsed and enriched");

    let records = if filter_config.is_active() {
        let filtered = apply_filters(&records, &filter_config);
        tracing::info!(records = filtered.len(), "applied date filter");
        filtered
    } else {
        records
    };

    if let (Some(path), Some(format)) = (args.export.as_ref(), export_format) {
        write_to_format(&records, path, format)?;
        tracing::info!(path = %path.display(), %format, "exported table");
    }

    let selection = args.user.as_deref().map_or(Selection::Overall, Selection::from);
    let config = AnalysisConfig::new().with_top_users(args.top);
    let report = Report::build(&records, &selection, &config, &stop_words);

    match args.report {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    tracing::debug!(elapsed_ms = total_start.elapsed().as_millis(), "done");
    Ok(())
}
