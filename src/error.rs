// src/error.rs
//! Error taxonomy for the scrape → clean → export pipeline.
//!
//! The first three variants are the pipeline failures: the source could not be
//! reached, its layout drifted, or a numeric cell stopped being numeric. The
//! rest belong to the sinks.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline and sink operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-success HTTP status
    #[error("connection to {url} failed: {reason}")]
    Connection {
        url: String,
        reason: String,
    },

    /// Expected table or columns not found; the upstream page changed
    #[error("page layout changed: {0}")]
    Layout(String),

    /// A field that should be numeric is not
    #[error("{field} for '{country}' is not a number: {value:?}")]
    Parse {
        country: String,
        field: &'static str,
        value: String,
    },

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("spreadsheet export failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// Document store unreachable or rejected the insert
    #[error("document store: {0}")]
    Store(String),
}

impl Error {
    #[inline]
    pub fn connection(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Connection { url: url.into(), reason: reason.to_string() }
    }

    #[inline]
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// True for the failures that abort a run before anything is written.
    pub fn is_pipeline(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Layout(_) | Self::Parse { .. })
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_country_and_field() {
        let e = Error::Parse { country: s!("Narnia"), field: "total_cases", value: s!("lots") };
        let msg = e.to_string();
        assert!(msg.contains("Narnia"));
        assert!(msg.contains("total_cases"));
        assert!(msg.contains("\"lots\""));
        assert!(e.is_pipeline());
    }

    #[test]
    fn store_errors_are_not_pipeline_errors() {
        assert!(!Error::Store(s!("refused")).is_pipeline());
        assert!(Error::layout("gone").is_pipeline());
    }
}
