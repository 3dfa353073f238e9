//! Extraction followed by linearization

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::extract::{Extraction, extract, extract_file};
use crate::linearize::linearize;
use serde::Serialize;
use std::path::Path;

/// Pseudocode for one diagram plus the anomalies found while reading it.
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub lines: Vec<String>,
    pub diagnostics: Diagnostics,
}

impl Translation {
    /// The listing as a single newline-separated string.
    pub fn pseudocode(&self) -> String {
        self.lines.join("\n")
    }
}

/// Translate diagram XML into pseudocode.
pub fn translate(xml: &str) -> Result<Translation> {
    finish(extract(xml)?)
}

/// Translate a diagram file into pseudocode.
pub fn translate_file(path: impl AsRef<Path>) -> Result<Translation> {
    finish(extract_file(path)?)
}

fn finish(extraction: Extraction) -> Result<Translation> {
    let Extraction { graph, diagnostics } = extraction;
    let lines = linearize(&graph)?;
    tracing::debug!("Linearized {} nodes into {} lines", graph.node_count(), lines.len());
    Ok(Translation { lines, diagnostics })
}
