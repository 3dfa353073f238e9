//! Core data structures for the flowchart graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic role of a diagram shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Rounded rectangle labelled "Start".
    Start,
    /// Rounded rectangle labelled "End".
    End,
    /// Any other rectangle.
    Process,
    /// Rhombus.
    Decision,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Process => "process",
            NodeKind::Decision => "if",
        };
        f.write_str(s)
    }
}

/// Which branch of a decision an edge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    True,
    False,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::True => f.write_str("true"),
            Condition::False => f.write_str("false"),
        }
    }
}

/// Axis-aligned rectangle in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Inclusive on all four sides.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        self.x <= px && px <= self.x + self.width && self.y <= py && py <= self.y + self.height
    }
}

/// One classified diagram shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub text: String,
    pub kind: NodeKind,
    pub bounds: Option<Bounds>,
}

impl Node {
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// A directed connector between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub condition: Condition,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, condition: Condition) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            condition,
        }
    }
}
