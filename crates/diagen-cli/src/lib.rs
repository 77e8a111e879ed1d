//! CLI logic for the diagen tool.
//!
//! This module contains the core CLI logic: loading configuration, wiring
//! up the Kroki-backed generator and dispatching between the listing mode
//! and the render pipeline.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    io::{self, Write},
    path::Path,
    sync::{Arc, atomic::AtomicBool},
};

use log::info;

use diagen::{DiagenError, DiagramGenerator, Renderer};

/// Run the diagen CLI application
///
/// Loads the configuration, creates a Kroki-backed generator and runs
/// [`execute`] with standard output as the message sink.
///
/// # Arguments
///
/// * `args` - Command-line arguments
/// * `interrupted` - Flag raised by the interrupt handler
///
/// # Errors
///
/// Returns `DiagenError` for:
/// - Configuration loading errors
/// - Validation errors for the diagram type
/// - Source reading errors
/// - Rendering errors
/// - Output writing errors
/// - `Cancelled` once `interrupted` is raised
pub fn run(args: &Args, interrupted: Arc<AtomicBool>) -> Result<(), DiagenError> {
    let app_config = config::load_config(args.config.as_deref().map(Path::new))?;
    let generator = DiagramGenerator::from_config(&app_config)?.with_interrupt_flag(interrupted);

    let stdout = io::stdout();
    execute(args, &generator, &mut stdout.lock())
}

/// Execute the CLI request against an existing generator.
///
/// With `--list-formats` the catalog listing is written to `out` and nothing
/// else happens. Otherwise the diagram is generated and a confirmation
/// naming the output path is written to `out`.
///
/// # Errors
///
/// Returns the `DiagenError` of the first failing stage.
pub fn execute<R, W>(args: &Args, generator: &DiagramGenerator<R>, out: &mut W) -> Result<(), DiagenError>
where
    R: Renderer,
    W: Write,
{
    if args.list_formats {
        info!(entries = generator.catalog().len(); "Listing supported formats");
        return generator.list_formats(out);
    }

    let (Some(input), Some(diagram_type)) = (args.input.as_deref(), args.diagram_type.as_deref())
    else {
        return Err(DiagenError::Unexpected(
            "an input file and a diagram type are required".into(),
        ));
    };

    let output_path = generator.generate(
        Path::new(input),
        diagram_type,
        args.output.as_deref().map(Path::new),
    )?;

    writeln!(out, "Diagram successfully saved to: {}", output_path.display())?;

    Ok(())
}
