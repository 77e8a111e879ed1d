//! Human-readable listing of a [`FormatCatalog`].

use std::io::{self, Write};

use diagen_core::{catalog::FormatCatalog, format::OutputFormat};

/// Write every catalog entry, in sorted key order, to `out`.
///
/// The listing starts with a two-line header followed by one line per
/// diagram type:
///
/// ```text
/// graphviz        | SVG: ✓ | Formats: png, svg, jpeg, pdf
/// ```
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_format_list<W: Write>(catalog: &FormatCatalog, out: &mut W) -> io::Result<()> {
    writeln!(out, "Supported diagram types and their output formats:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    for (diagram_type, formats) in catalog.iter() {
        let svg = if formats.contains(&OutputFormat::Svg) {
            "✓"
        } else {
            "✗"
        };
        let formats = formats
            .iter()
            .map(OutputFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "{diagram_type:15} | SVG: {svg} | Formats: {formats}")?;
    }

    Ok(())
}
