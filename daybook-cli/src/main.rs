mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use daybook_core::Converter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daybook: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut converter = Converter::new()?;
    if let Some(mode) = cli.on_duplicate {
        converter.config.on_duplicate = mode.into();
    }
    let output = cli
        .output
        .unwrap_or_else(|| converter.config.output_dir.clone());

    let summary = converter.convert_file(&cli.input, &output)?;

    if summary.overwritten > 0 {
        log::warn!(
            "{} entries shared a day with an earlier entry and replaced it",
            summary.overwritten
        );
    }
    println!(
        "Wrote {} entries and {} month indexes to {}",
        summary.entries_written,
        summary.indexes_written,
        output.display()
    );
    Ok(())
}
