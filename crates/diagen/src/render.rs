//! Rendering backends and the SVG render invoker.
//!
//! A [`Renderer`] is the external collaborator that turns diagram source into
//! image bytes. diagen never inspects how it does so; the only logic here is
//! [`render_svg`], which asks for SVG and refuses anything that does not look
//! like an SVG document.

use log::{debug, info};
use thiserror::Error;

use diagen_core::{format::OutputFormat, image::RenderedImage};

use crate::DiagenError;

/// Failures reported by, or detected in the output of, a [`Renderer`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Backend(String),

    #[error("rendering service responded with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Generated image data is empty")]
    Empty,

    #[error("Generated data is not a valid SVG image")]
    NotSvg,
}

/// Converts diagram source text into image bytes.
///
/// Implementations own any retry, timeout, or transport behavior. An
/// implementation should return an error rather than an error payload, but
/// [`render_svg`] still checks the bytes it gets back.
pub trait Renderer {
    /// Render `source`, written in the `diagram_type` notation, to `format`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] for malformed input or an unreachable backend.
    fn render(
        &self,
        source: &str,
        diagram_type: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(
        &self,
        source: &str,
        diagram_type: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        (**self).render(source, diagram_type, format)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(
        &self,
        source: &str,
        diagram_type: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        (**self).render(source, diagram_type, format)
    }
}

/// Request an SVG rendering of `source` and check its shape.
///
/// # Errors
///
/// Returns [`DiagenError::Render`] if the renderer fails, returns no bytes,
/// or returns bytes that do not start with `<svg` once trimmed.
pub fn render_svg<R: Renderer + ?Sized>(
    renderer: &R,
    source: &str,
    diagram_type: &str,
) -> Result<RenderedImage, DiagenError> {
    info!(diagram_type; "Generating diagram");

    let bytes = renderer.render(source, diagram_type, OutputFormat::Svg)?;
    let image = RenderedImage::new(OutputFormat::Svg, bytes);

    if image.is_empty() {
        return Err(RenderError::Empty.into());
    }
    if !image.looks_like_svg() {
        return Err(RenderError::NotSvg.into());
    }

    debug!(size = image.bytes().len(); "SVG rendered");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    struct Canned(Vec<u8>);

    impl Renderer for Canned {
        fn render(&self, _: &str, _: &str, _: OutputFormat) -> Result<Vec<u8>, RenderError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Renderer for Failing {
        fn render(&self, _: &str, _: &str, _: OutputFormat) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Backend("connection refused".to_string()))
        }
    }

    #[test]
    fn test_svg_passes_through_unchanged() {
        let bytes = b"  <svg width=\"10\"></svg>\n";
        let image = render_svg(&Canned(bytes.to_vec()), "digraph G {A->B}", "graphviz").unwrap();

        assert_eq!(image.format(), OutputFormat::Svg);
        assert_eq!(image.bytes(), bytes);
    }

    #[test]
    fn test_empty_output_is_a_failure() {
        let err = render_svg(&Canned(Vec::new()), "digraph G {}", "graphviz").unwrap_err();
        assert!(matches!(err, DiagenError::Render(RenderError::Empty)));
    }

    #[test]
    fn test_backend_error_is_wrapped() {
        let err = render_svg(&Failing, "digraph G {}", "graphviz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to generate diagram: connection refused"
        );
    }

    #[test]
    fn test_boxed_renderer() {
        let renderer: Box<dyn Renderer> = Box::new(Canned(b"<svg/>".to_vec()));
        assert!(render_svg(&renderer, "a -> b", "d2").is_ok());
    }

    proptest! {
        #[test]
        fn prop_non_svg_bytes_always_fail(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            prop_assume!(!bytes.trim_ascii().starts_with(b"<svg"));

            let result = render_svg(&Canned(bytes), "x", "graphviz");

            prop_assert!(matches!(result, Err(DiagenError::Render(_))));
        }
    }
}
