//! Output path resolution and image writing.

use std::{
    ffi::OsString,
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::info;

use diagen_core::image::RenderedImage;

use crate::DiagenError;

const SVG_SUFFIX: &str = ".svg";

/// Resolve where the rendered SVG for `input` should be written.
///
/// Without an explicit destination the name is derived as
/// `{input-stem}_{diagram-type}.svg` in the current directory. A destination
/// that does not already end in `.svg` (in any case) gets the suffix
/// appended.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use diagen::output::resolve_output_path;
///
/// let path = resolve_output_path(Path::new("graph.txt"), "graphviz", None);
/// assert_eq!(path, PathBuf::from("graph_graphviz.svg"));
///
/// let path = resolve_output_path(Path::new("graph.txt"), "graphviz", Some(Path::new("out")));
/// assert_eq!(path, PathBuf::from("out.svg"));
/// ```
pub fn resolve_output_path(input: &Path, diagram_type: &str, explicit: Option<&Path>) -> PathBuf {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default();
            PathBuf::from(format!("{stem}_{diagram_type}{SVG_SUFFIX}"))
        }
    };

    if has_svg_suffix(&path) {
        path
    } else {
        let mut name = OsString::from(path);
        name.push(SVG_SUFFIX);
        PathBuf::from(name)
    }
}

fn has_svg_suffix(path: &Path) -> bool {
    path.to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(SVG_SUFFIX)
}

/// Write the image bytes verbatim to `path`, creating or truncating the file.
///
/// An existing destination is written in place: a symlink is followed and
/// its target updated, and the file keeps its permissions. Callers only get
/// here once the image passed the SVG shape check.
///
/// # Errors
///
/// Returns [`DiagenError::Write`] for any I/O failure.
pub fn write_image(image: &RenderedImage, path: &Path) -> Result<(), DiagenError> {
    let write_error = |err: io::Error| DiagenError::new_write_error(path, err);

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(image.bytes()).map_err(write_error)?;
    file.sync_all().map_err(write_error)?;

    info!(path = path.display().to_string(), size = image.bytes().len(); "Image written");
    Ok(())
}
