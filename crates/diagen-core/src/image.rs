//! Rendered diagram images.

use crate::format::OutputFormat;

/// The SVG root element marker every SVG rendering must start with.
pub const SVG_MARKER: &[u8] = b"<svg";

/// Bytes produced by a rendering backend together with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    format: OutputFormat,
    bytes: Vec<u8>,
}

impl RenderedImage {
    /// Wraps `bytes` rendered in `format`.
    pub fn new(format: OutputFormat, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            format,
            bytes: bytes.into(),
        }
    }

    /// Returns the format the image was rendered in.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the raw image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns `true` if there are no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if the bytes, ignoring surrounding ASCII whitespace,
    /// begin with the `<svg` root element marker.
    pub fn looks_like_svg(&self) -> bool {
        self.bytes.trim_ascii().starts_with(SVG_MARKER)
    }
}
