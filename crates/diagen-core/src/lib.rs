//! Diagen Core Types
//!
//! This crate provides the data model shared by the diagen library and CLI:
//!
//! - **Formats**: Output format keys a rendering backend understands ([`format::OutputFormat`])
//! - **Catalog**: Diagram types and the formats each renders to ([`catalog::FormatCatalog`])
//! - **Images**: Bytes returned by a rendering backend ([`image::RenderedImage`])

pub mod catalog;
pub mod format;
pub mod image;
