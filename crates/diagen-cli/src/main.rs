//! diagen CLI entry point.

use std::{
    process,
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use clap::Parser;
use log::{LevelFilter, debug, info, warn};
use miette::Diagnostic;

use diagen::DiagenError;
use diagen_cli::{
    Args,
    error_adapter::{report_line, to_reportable},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting diagen");
    debug!(args:?; "Parsed arguments");

    // The first interrupt stops the pipeline at the next stage boundary; a
    // second one exits without waiting for the current stage.
    let interrupted = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&interrupted);
    if let Err(err) = ctrlc::set_handler(move || {
        if handler_flag.swap(true, Ordering::SeqCst) {
            eprintln!("\n{}", DiagenError::Cancelled);
            process::exit(1);
        }
    }) {
        warn!(err:%; "Could not install interrupt handler");
    }

    if let Err(err) = diagen_cli::run(&args, interrupted) {
        if let Some(code) = to_reportable(&err).code() {
            debug!(code:% = code; "Run failed");
        }
        eprintln!("{}", report_line(&err));
        process::exit(1);
    }

    info!("Completed successfully");
}
