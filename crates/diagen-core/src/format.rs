//! Output format keys understood by rendering backends.
//!
//! The names match the path segments and configuration strings used by
//! Kroki-compatible servers (`svg`, `png`, `jpeg`, `pdf`, `txt`, `base64`).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid output format `{0}`, valid values: svg, png, jpeg, pdf, txt, base64")]
pub struct FormatParseError(String);

/// An image format a diagram can be rendered to.
///
/// # Variants
///
/// - `Svg` - Scalable vector graphics, the primary output of diagen
/// - `Png`, `Jpeg` - Raster images
/// - `Pdf` - Portable document
/// - `Txt` - Plain text (ASCII art) renderings
/// - `Base64` - Base64 encoded PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    Svg,
    Png,
    Jpeg,
    Pdf,
    Txt,
    Base64,
}

impl OutputFormat {
    /// Returns the lowercase key for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Pdf => "pdf",
            Self::Txt => "txt",
            Self::Base64 => "base64",
        }
    }

    /// Returns `true` for [`OutputFormat::Svg`].
    pub fn is_svg(&self) -> bool {
        matches!(self, Self::Svg)
    }
}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            "txt" => Ok(Self::Txt),
            "base64" => Ok(Self::Base64),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = FormatParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("SVG".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert_eq!(" Png ".parse::<OutputFormat>(), Ok(OutputFormat::Png));
        assert_eq!("jpg".parse::<OutputFormat>(), Ok(OutputFormat::Jpeg));
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "bmp".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("`bmp`"));
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(OutputFormat::Base64.to_string(), "base64");
        assert_eq!(OutputFormat::Jpeg.to_string(), "jpeg");
    }
}
