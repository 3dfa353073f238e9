//! Fatal translation errors

use std::path::PathBuf;

/// Errors that abort a translation.
///
/// Per-element anomalies never end up here; they are recorded in
/// [`Diagnostics`](crate::Diagnostics) and extraction carries on.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid diagram XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("cannot read diagram {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("multiple start nodes detected: {second} and {first}")]
    MultipleStartNodes { first: String, second: String },
    #[error("missing start node")]
    MissingStartNode,
}

impl TranslateError {
    /// Stable machine-readable code, used by the HTTP layer.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Xml(_) => "E_INVALID_XML",
            Self::Io { .. } => "E_IO",
            Self::MultipleStartNodes { .. } => "E_MULTIPLE_START",
            Self::MissingStartNode => "E_MISSING_START",
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
