//! [`Renderer`] backed by a Kroki server.
//!
//! Kroki renders a diagram when the source is POSTed as plain text to
//! `{endpoint}/{diagram_type}/{output_format}`. Failures come back as a
//! non-success status with a short plain-text explanation.

use log::{debug, warn};
use reqwest::{
    blocking::Client,
    header::{ACCEPT, CONTENT_TYPE},
};

use diagen_core::format::OutputFormat;

use crate::{
    DiagenError,
    config::RendererConfig,
    render::{RenderError, Renderer},
};

const USER_AGENT: &str = concat!("diagen/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for a Kroki-compatible rendering service.
#[derive(Debug, Clone)]
pub struct KrokiClient {
    client: Client,
    endpoint: String,
}

impl KrokiClient {
    /// Create a client for the service described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagenError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &RendererConfig) -> Result<Self, DiagenError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| DiagenError::Config(format!("Failed to create HTTP client: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the URL a diagram of `diagram_type` is rendered to `format` at.
    pub fn url(&self, diagram_type: &str, format: OutputFormat) -> String {
        format!("{}/{diagram_type}/{format}", self.endpoint)
    }
}

impl Renderer for KrokiClient {
    fn render(
        &self,
        source: &str,
        diagram_type: &str,
        format: OutputFormat,
    ) -> Result<Vec<u8>, RenderError> {
        let url = self.url(diagram_type, format);
        debug!(url = url.as_str(); "Requesting rendering");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .header(ACCEPT, content_type(format))
            .body(source.to_string())
            .send()
            .map_err(|err| RenderError::Backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = match body.trim() {
                "" => status.canonical_reason().unwrap_or("no details").to_string(),
                text => text.to_string(),
            };
            warn!(status = status.as_u16(), url = url.as_str(); "Rendering service rejected the request");
            return Err(RenderError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .map_err(|err| RenderError::Backend(err.to_string()))?;
        debug!(size = bytes.len(); "Rendering service responded");

        if format.is_svg() {
            Ok(strip_xml_prolog(&bytes).to_vec())
        } else {
            Ok(bytes.to_vec())
        }
    }
}

fn content_type(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Svg => "image/svg+xml",
        OutputFormat::Png => "image/png",
        OutputFormat::Jpeg => "image/jpeg",
        OutputFormat::Pdf => "application/pdf",
        OutputFormat::Txt | OutputFormat::Base64 => "text/plain",
    }
}

/// Skip the XML declaration, doctype, and comments preceding the `<svg` root.
///
/// Anything that cannot be recognised is returned untouched.
fn strip_xml_prolog(mut bytes: &[u8]) -> &[u8] {
    let original = bytes;
    loop {
        bytes = bytes.trim_ascii_start();

        let terminator: &[u8] = if bytes.starts_with(b"<?") {
            b"?>"
        } else if bytes.starts_with(b"<!--") {
            b"-->"
        } else if bytes.starts_with(b"<!DOCTYPE") || bytes.starts_with(b"<!doctype") {
            match (find(bytes, b"["), find(bytes, b">")) {
                (Some(open), Some(close)) if open < close => b"]>",
                _ => b">",
            }
        } else {
            return bytes;
        };

        match find(bytes, terminator) {
            Some(index) => bytes = &bytes[index + terminator.len()..],
            None => return original,
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
