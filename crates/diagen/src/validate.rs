//! Diagram type validation against a [`FormatCatalog`].

use log::debug;

use diagen_core::{catalog::FormatCatalog, format::OutputFormat};

use crate::DiagenError;

/// Check that `diagram_type` is known to `catalog` and renders to SVG.
///
/// # Errors
///
/// Returns [`DiagenError::UnsupportedType`] if the type is absent or has no
/// formats, and [`DiagenError::UnsupportedOutput`] if SVG is not among them.
pub fn validate_diagram_type(catalog: &FormatCatalog, diagram_type: &str) -> Result<(), DiagenError> {
    let formats = catalog
        .formats(diagram_type)
        .filter(|formats| !formats.is_empty())
        .ok_or_else(|| DiagenError::UnsupportedType(diagram_type.to_string()))?;

    if !formats.contains(&OutputFormat::Svg) {
        return Err(DiagenError::UnsupportedOutput(diagram_type.to_string()));
    }

    debug!(diagram_type, formats:? = formats; "Diagram type validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn catalog() -> FormatCatalog {
        let mut catalog = FormatCatalog::new();
        catalog.insert("graphviz", [OutputFormat::Png, OutputFormat::Svg]);
        catalog.insert("asciiart", [OutputFormat::Txt]);
        catalog.insert("hollow", Vec::<OutputFormat>::new());
        catalog
    }

    #[test]
    fn test_svg_type_is_valid() {
        assert!(validate_diagram_type(&catalog(), "graphviz").is_ok());
    }

    #[test]
    fn test_absent_type() {
        let err = validate_diagram_type(&catalog(), "bogus-type").unwrap_err();
        assert!(matches!(err, DiagenError::UnsupportedType(ref key) if key == "bogus-type"));
    }

    #[test]
    fn test_type_without_formats_is_unsupported() {
        let err = validate_diagram_type(&catalog(), "hollow").unwrap_err();
        assert!(matches!(err, DiagenError::UnsupportedType(_)));
    }

    #[test]
    fn test_type_without_svg() {
        let err = validate_diagram_type(&catalog(), "asciiart").unwrap_err();
        assert_eq!(
            err.to_string(),
            "SVG output not supported for diagram type: asciiart"
        );
    }

    fn format_strategy() -> impl Strategy<Value = OutputFormat> {
        prop_oneof![
            Just(OutputFormat::Svg),
            Just(OutputFormat::Png),
            Just(OutputFormat::Jpeg),
            Just(OutputFormat::Pdf),
            Just(OutputFormat::Txt),
            Just(OutputFormat::Base64),
        ]
    }

    proptest! {
        #[test]
        fn prop_validation_matches_catalog(
            entries in prop::collection::btree_map("[a-z]{1,8}", prop::collection::vec(format_strategy(), 0..4), 0..8),
            unknown in "[a-z]{1,8}",
        ) {
            let catalog: FormatCatalog = entries.clone().into_iter().collect();

            for key in entries.keys().chain(std::iter::once(&unknown)) {
                let result = validate_diagram_type(&catalog, key);
                match entries.get(key) {
                    Some(formats) if formats.contains(&OutputFormat::Svg) => prop_assert!(result.is_ok()),
                    Some(formats) if !formats.is_empty() => {
                        prop_assert!(matches!(result, Err(DiagenError::UnsupportedOutput(_))));
                    }
                    _ => prop_assert!(matches!(result, Err(DiagenError::UnsupportedType(_)))),
                }
            }
        }
    }
}
