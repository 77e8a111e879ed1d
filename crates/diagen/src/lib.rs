//! Diagen - Render diagram source files to SVG.
//!
//! Diagen turns a text file written in a diagram notation (Graphviz DOT,
//! PlantUML, Mermaid, ...) into an SVG image. Rendering itself is delegated
//! to a [`Renderer`], by default a Kroki server; this crate validates the
//! request, reads the source, checks the rendered bytes and writes them out.

pub mod config;
pub mod listing;
pub mod output;
pub mod render;
pub mod source;
pub mod validate;

#[cfg(feature = "kroki")]
pub mod kroki;

mod error;

pub use diagen_core::{catalog, format, image};

pub use error::DiagenError;
pub use render::{RenderError, Renderer};
pub use source::DiagramSource;

use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use log::{debug, info, warn};

use catalog::FormatCatalog;
use image::RenderedImage;

/// Runs the diagram pipeline against a catalog and a renderer.
///
/// The catalog and renderer are injected so they can be swapped for fakes;
/// with the `kroki` feature, [`DiagramGenerator::from_config`] wires up the
/// Kroki client.
///
/// A generator can share an interrupt flag with a signal handler (see
/// [`DiagramGenerator::with_interrupt_flag`]). The flag is checked between
/// pipeline stages, and a raised flag ends the run with
/// [`DiagenError::Cancelled`] before anything is written.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use diagen::{DiagramGenerator, config::AppConfig};
///
/// let generator = DiagramGenerator::from_config(&AppConfig::default())
///     .expect("Failed to create generator");
///
/// let output = generator
///     .generate(Path::new("graph.txt"), "graphviz", None)
///     .expect("Failed to generate diagram");
///
/// assert_eq!(output, Path::new("graph_graphviz.svg"));
/// ```
#[derive(Debug, Clone)]
pub struct DiagramGenerator<R> {
    catalog: FormatCatalog,
    renderer: R,
    interrupted: Arc<AtomicBool>,
}

#[cfg(feature = "kroki")]
impl DiagramGenerator<kroki::KrokiClient> {
    /// Create a generator that renders through the Kroki server named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagenError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &config::AppConfig) -> Result<Self, DiagenError> {
        let client = kroki::KrokiClient::new(config.renderer())?;
        Ok(Self::new(config.catalog(), client))
    }
}

impl<R: Renderer> DiagramGenerator<R> {
    /// Create a new generator from a catalog and a renderer.
    pub fn new(catalog: FormatCatalog, renderer: R) -> Self {
        Self {
            catalog,
            renderer,
            interrupted: Arc::default(),
        }
    }

    /// Share `flag` with whoever raises interrupts, typically a Ctrl-C handler.
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    /// Returns the format catalog.
    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Check that `diagram_type` is known and renders to SVG.
    ///
    /// # Errors
    ///
    /// See [`validate::validate_diagram_type`].
    pub fn validate(&self, diagram_type: &str) -> Result<(), DiagenError> {
        validate::validate_diagram_type(&self.catalog, diagram_type)
    }

    /// Render `source` to SVG and check the result.
    ///
    /// # Errors
    ///
    /// See [`render::render_svg`].
    pub fn render_svg(
        &self,
        source: &DiagramSource,
        diagram_type: &str,
    ) -> Result<RenderedImage, DiagenError> {
        render::render_svg(&self.renderer, source.text(), diagram_type)
    }

    /// Run the whole pipeline: validate, read, render and write.
    ///
    /// Returns the path the SVG was written to. Nothing is written unless
    /// every earlier stage succeeded and no interrupt was raised.
    ///
    /// # Arguments
    ///
    /// * `input` - Path to the diagram source file
    /// * `diagram_type` - Catalog key of the diagram notation
    /// * `output` - Destination path; derived from `input` when `None`
    ///
    /// # Errors
    ///
    /// Returns the [`DiagenError`] of the first stage that fails, or
    /// [`DiagenError::Cancelled`] once the interrupt flag is raised.
    pub fn generate(
        &self,
        input: &Path,
        diagram_type: &str,
        output: Option<&Path>,
    ) -> Result<PathBuf, DiagenError> {
        info!(
            input_path = input.display().to_string(),
            diagram_type;
            "Processing diagram"
        );

        self.validate(diagram_type)?;
        self.check_interrupted()?;

        let source = DiagramSource::read(input)?;
        let output_path = output::resolve_output_path(source.path(), diagram_type, output);
        debug!(output_path = output_path.display().to_string(); "Output path resolved");
        self.check_interrupted()?;

        let image = self.render_svg(&source, diagram_type)?;
        self.check_interrupted()?;
        output::write_image(&image, &output_path)?;

        info!(output_path = output_path.display().to_string(); "SVG exported successfully");
        Ok(output_path)
    }

    fn check_interrupted(&self) -> Result<(), DiagenError> {
        if self.interrupted.load(Ordering::SeqCst) {
            warn!("Interrupt received, stopping before the next stage");
            return Err(DiagenError::Cancelled);
        }
        Ok(())
    }

    /// Write the catalog listing to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagenError::Unexpected`] if `out` fails.
    pub fn list_formats<W: Write>(&self, out: &mut W) -> Result<(), DiagenError> {
        listing::write_format_list(&self.catalog, out)?;
        Ok(())
    }
}
