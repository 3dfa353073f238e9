//! Flowscribe Core — flowchart graph model, draw.io extraction and pseudocode linearization

pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod graph;
pub mod linearize;
pub mod model;
pub mod style;
pub mod translate;


#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::TranslateError;
pub use extract::{Extraction, extract, extract_file};
pub use graph::Graph;
pub use linearize::{INDENT_STEP, linearize};
pub use model::{Bounds, Condition, Edge, Node, NodeKind};
pub use style::{Style, parse_style};
pub use translate::{Translation, translate, translate_file};
