//! Reading diagram source files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::DiagenError;

/// Diagram source text loaded from disk.
///
/// The text is always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource {
    path: PathBuf,
    text: String,
}

impl DiagramSource {
    /// Read and trim the diagram source at `path`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`DiagenError::NotFound`] if `path` does not exist
    /// - [`DiagenError::Decode`] if the file is not valid UTF-8
    /// - [`DiagenError::EmptySource`] if the file is empty or all whitespace
    /// - [`DiagenError::Unexpected`] for any other I/O failure
    pub fn read(path: impl AsRef<Path>) -> Result<Self, DiagenError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading diagram source");

        let bytes = fs::read(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => DiagenError::NotFound(path.to_path_buf()),
            _ => DiagenError::from(err),
        })?;

        let text = String::from_utf8(bytes).map_err(|_| DiagenError::Decode(path.to_path_buf()))?;
        let text = text.trim();

        if text.is_empty() {
            return Err(DiagenError::EmptySource(path.to_path_buf()));
        }

        debug!(length = text.len(); "Diagram source loaded");

        Ok(Self {
            path: path.to_path_buf(),
            text: text.to_string(),
        })
    }

    /// Returns the path the source was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the trimmed source text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_read_trims_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        fs::write(&path, "\n\n  digraph G {A->B}  \n").unwrap();

        let source = DiagramSource::read(&path).unwrap();
        assert_eq!(source.text(), "digraph G {A->B}");
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = DiagramSource::read(&path).unwrap_err().to_string();
        assert!(err.starts_with("Input file not found"), "{err}");
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();

        let err = DiagramSource::read(&path).unwrap_err();
        assert!(matches!(err, DiagenError::Decode(_)));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let err = DiagramSource::read(&path).unwrap_err();
        assert!(matches!(err, DiagenError::EmptySource(_)));
    }

    proptest! {
        #[test]
        fn prop_whitespace_only_is_empty(text in "[ \t\r\n]{0,64}") {
            let dir = tempdir().unwrap();
            let path = dir.path().join("blank.txt");
            fs::write(&path, &text).unwrap();

            let result = DiagramSource::read(&path);
            prop_assert!(matches!(result, Err(DiagenError::EmptySource(_))));
        }

        #[test]
        fn prop_round_trip_keeps_trimmed_text(text in "\\PC{1,200}") {
            prop_assume!(!text.trim().is_empty());

            let dir = tempdir().unwrap();
            let path = dir.path().join("source.txt");
            fs::write(&path, &text).unwrap();

            let source = DiagramSource::read(&path).unwrap();
            prop_assert_eq!(source.text(), text.trim());
        }
    }
}
