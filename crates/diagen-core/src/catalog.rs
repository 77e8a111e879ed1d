//! Diagram type catalogs.
//!
//! A [`FormatCatalog`] maps diagram type keys (`graphviz`, `plantuml`, ...)
//! to the output formats a rendering backend can produce for them. The
//! catalog is read-only once handed to the pipeline; callers build it up
//! front, either from [`FormatCatalog::kroki`] or from scratch.
//!
//! # Example
//!
//! ```
//! use diagen_core::{catalog::FormatCatalog, format::OutputFormat};
//!
//! let mut catalog = FormatCatalog::new();
//! catalog.insert("graphviz", [OutputFormat::Svg, OutputFormat::Png]);
//!
//! assert!(catalog.supports("graphviz", OutputFormat::Svg));
//! assert!(!catalog.supports("mermaid", OutputFormat::Svg));
//! ```

use std::collections::BTreeMap;

use indexmap::IndexSet;
use log::trace;

use crate::format::OutputFormat;

use OutputFormat::{Base64, Jpeg, Pdf, Png, Svg, Txt};

/// Diagram types served by a stock Kroki deployment and their output formats.
const KROKI_FORMATS: &[(&str, &[OutputFormat])] = &[
    ("actdiag", &[Png, Svg, Pdf]),
    ("blockdiag", &[Png, Svg, Pdf]),
    ("bpmn", &[Svg]),
    ("bytefield", &[Svg]),
    ("c4plantuml", &[Png, Svg, Pdf, Txt, Base64]),
    ("d2", &[Svg]),
    ("dbml", &[Svg]),
    ("ditaa", &[Png, Svg]),
    ("erd", &[Png, Svg, Jpeg, Pdf]),
    ("excalidraw", &[Svg]),
    ("graphviz", &[Png, Svg, Jpeg, Pdf]),
    ("mermaid", &[Png, Svg]),
    ("nomnoml", &[Svg]),
    ("nwdiag", &[Png, Svg, Pdf]),
    ("packetdiag", &[Png, Svg, Pdf]),
    ("pikchr", &[Svg]),
    ("plantuml", &[Png, Svg, Pdf, Txt, Base64]),
    ("rackdiag", &[Png, Svg, Pdf]),
    ("seqdiag", &[Png, Svg, Pdf]),
    ("structurizr", &[Png, Svg, Pdf, Txt, Base64]),
    ("svgbob", &[Svg]),
    ("symbolator", &[Svg]),
    ("tikz", &[Png, Svg, Jpeg, Pdf]),
    ("umlet", &[Png, Svg, Jpeg]),
    ("vega", &[Png, Svg, Pdf]),
    ("vegalite", &[Png, Svg, Pdf]),
    ("wavedrom", &[Svg]),
    ("wireviz", &[Png, Svg]),
];

/// Mapping from diagram type key to the set of formats it renders to.
///
/// Keys iterate in sorted order. Each format set keeps the order in which
/// formats were first inserted and never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatCatalog {
    entries: BTreeMap<String, IndexSet<OutputFormat>>,
}

impl FormatCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog of a stock Kroki server.
    pub fn kroki() -> Self {
        KROKI_FORMATS
            .iter()
            .map(|(key, formats)| (*key, formats.iter().copied()))
            .collect()
    }

    /// Inserts or replaces the formats for `diagram_type`.
    ///
    /// Returns the previous format set, if any.
    pub fn insert(
        &mut self,
        diagram_type: impl Into<String>,
        formats: impl IntoIterator<Item = OutputFormat>,
    ) -> Option<IndexSet<OutputFormat>> {
        let diagram_type = diagram_type.into();
        let formats: IndexSet<OutputFormat> = formats.into_iter().collect();
        trace!(diagram_type = diagram_type.as_str(), formats:? = formats; "Catalog entry inserted");
        self.entries.insert(diagram_type, formats)
    }

    /// Returns the formats registered for `diagram_type`, if the key is known.
    pub fn formats(&self, diagram_type: &str) -> Option<&IndexSet<OutputFormat>> {
        self.entries.get(diagram_type)
    }

    /// Returns `true` if `diagram_type` is known and renders to `format`.
    pub fn supports(&self, diagram_type: &str, format: OutputFormat) -> bool {
        self.formats(diagram_type)
            .is_some_and(|formats| formats.contains(&format))
    }

    /// Iterates over all entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<OutputFormat>)> {
        self.entries
            .iter()
            .map(|(key, formats)| (key.as_str(), formats))
    }

    /// Returns the number of diagram types in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, F> FromIterator<(K, F)> for FormatCatalog
where
    K: Into<String>,
    F: IntoIterator<Item = OutputFormat>,
{
    fn from_iter<T: IntoIterator<Item = (K, F)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl<K, F> Extend<(K, F)> for FormatCatalog
where
    K: Into<String>,
    F: IntoIterator<Item = OutputFormat>,
{
    fn extend<T: IntoIterator<Item = (K, F)>>(&mut self, iter: T) {
        for (key, formats) in iter {
            self.insert(key, formats);
        }
    }
}
