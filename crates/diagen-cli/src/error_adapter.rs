//! Error adapter for converting DiagenError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's diagnostics. Every error becomes one diagnostic carrying a
//! stable code and, where there is something useful to suggest, a help text.
//! [`report_line`] folds a diagnostic into the one line the CLI prints.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use diagen::{DiagenError, RenderError};

/// Adapter for a [`DiagenError`].
pub struct ErrorAdapter<'a>(pub &'a DiagenError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            DiagenError::UnsupportedType(_) => "diagen::unsupported_type",
            DiagenError::UnsupportedOutput(_) => "diagen::unsupported_output",
            DiagenError::NotFound(_) => "diagen::not_found",
            DiagenError::Decode(_) => "diagen::decode",
            DiagenError::EmptySource(_) => "diagen::empty_source",
            DiagenError::Render(_) => "diagen::render",
            DiagenError::Write { .. } => "diagen::write",
            DiagenError::Config(_) => "diagen::config",
            DiagenError::Cancelled => "diagen::cancelled",
            DiagenError::Unexpected(_) => "diagen::unexpected",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            DiagenError::UnsupportedType(_) | DiagenError::UnsupportedOutput(_) => {
                "run `diagen --list-formats` to see the supported diagram types"
            }
            DiagenError::Decode(_) => "the input file must be UTF-8 encoded text",
            DiagenError::Render(RenderError::Backend(_)) => {
                "check that the rendering service is reachable, or set `renderer.endpoint` in the configuration file"
            }
            DiagenError::Render(RenderError::Rejected { .. }) => {
                "check the diagram source for syntax errors"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`DiagenError`] into a reportable diagnostic.
pub fn to_reportable(err: &DiagenError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

/// Render `err` as the single line printed on stderr.
///
/// The help text, if any, follows the message on the same line. A
/// cancellation is reported without the `Error:` prefix.
pub fn report_line(err: &DiagenError) -> String {
    let reportable = to_reportable(err);
    let message = match err {
        DiagenError::Cancelled => reportable.to_string(),
        _ => format!("Error: {reportable}"),
    };

    match reportable.help() {
        Some(help) => format!("{message} (help: {help})"),
        None => message,
    }
}
