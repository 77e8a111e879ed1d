//! Configuration types for diagen.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining renderer and format settings.
//! - [`RendererConfig`] - Where the rendering service lives and how long to wait for it.
//!
//! # Example
//!
//! ```
//! # use diagen::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.renderer().endpoint(), "https://kroki.io");
//! assert!(config.catalog().supports("graphviz", diagen::format::OutputFormat::Svg));
//! ```

use std::time::Duration;

use indexmap::IndexMap;
use serde::Deserialize;

use diagen_core::{catalog::FormatCatalog, format::OutputFormat};

/// Public Kroki instance used when no endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "https://kroki.io";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Renderer configuration section.
    #[serde(default)]
    renderer: RendererConfig,

    /// Extra or replacement catalog entries, keyed by diagram type.
    #[serde(default)]
    formats: IndexMap<String, Vec<OutputFormat>>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given renderer settings and no
    /// catalog overrides.
    pub fn new(renderer: RendererConfig) -> Self {
        Self {
            renderer,
            formats: IndexMap::new(),
        }
    }

    /// Returns the renderer configuration.
    pub fn renderer(&self) -> &RendererConfig {
        &self.renderer
    }

    /// Returns the configured catalog overrides.
    pub fn formats(&self) -> &IndexMap<String, Vec<OutputFormat>> {
        &self.formats
    }

    /// Builds the format catalog: the stock Kroki catalog with the
    /// configured entries inserted over it.
    pub fn catalog(&self) -> FormatCatalog {
        let mut catalog = FormatCatalog::kroki();
        catalog.extend(
            self.formats
                .iter()
                .map(|(key, formats)| (key.as_str(), formats.iter().copied())),
        );
        catalog
    }
}

/// Settings for the rendering service.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Base URL of a Kroki-compatible server.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RendererConfig {
    /// Creates a new [`RendererConfig`].
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL of the rendering service.
    /// * `timeout` - Request timeout, truncated to whole seconds.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: timeout.as_secs(),
        }
    }

    /// Returns the base URL of the rendering service.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
