//! Graph → indented pseudocode
//!
//! Depth-first walk from the start node with one visited set for the whole
//! walk: a node reached a second time (cycle or merge point) produces no
//! output. The walk uses an explicit stack so deep or pathological diagrams
//! cannot exhaust the call stack; frames are pushed in reverse so pops
//! happen in the same order a recursive walk would visit.

use crate::error::{Result, TranslateError};
use crate::graph::Graph;
use crate::model::{Condition, NodeKind};
use std::collections::HashSet;

/// Spaces added per branch level.
pub const INDENT_STEP: usize = 4;

struct Frame<'g> {
    node_id: &'g str,
    indent: usize,
    /// Branch marker to emit before visiting, set for decision children.
    branch: Option<Condition>,
}

/// Linearize a graph into pseudocode lines, starting at its entry node.
pub fn linearize(graph: &Graph) -> Result<Vec<String>> {
    let entry = graph.entry().ok_or(TranslateError::MissingStartNode)?;

    let mut lines = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![Frame {
        node_id: entry.id.as_str(),
        indent: 0,
        branch: None,
    }];

    while let Some(frame) = stack.pop() {
        if let Some(condition) = frame.branch {
            let marker = match condition {
                Condition::True => "[true branch]",
                Condition::False => "[false branch]",
            };
            lines.push(indented(frame.indent, marker));
        }

        if !visited.insert(frame.node_id) {
            continue;
        }
        let Some(node) = graph.node(frame.node_id) else {
            continue;
        };

        let indent = frame.indent;
        let mut children = Vec::new();
        match node.kind {
            NodeKind::Start => lines.push(indented(indent, "begin program")),
            NodeKind::End => lines.push(indented(indent, "end program")),
            NodeKind::Process => lines.push(indented(indent, &format!("perform: {}", node.text))),
            NodeKind::Decision => {
                lines.push(indented(indent, &format!("if {}:", node.text)));
                for condition in [Condition::True, Condition::False] {
                    children.extend(
                        graph
                            .edges_from(&node.id)
                            .filter(|e| e.condition == condition)
                            .map(|e| Frame {
                                node_id: e.target.as_str(),
                                indent: indent + INDENT_STEP,
                                branch: Some(condition),
                            }),
                    );
                }
            }
        }

        // Straight-line fall-through, including the malformed case of a
        // non-decision node with several outgoing edges.
        if node.kind != NodeKind::Decision {
            children.extend(graph.edges_from(&node.id).map(|e| Frame {
                node_id: e.target.as_str(),
                indent,
                branch: None,
            }));
        }

        stack.extend(children.into_iter().rev());
    }

    Ok(lines)
}

fn indented(indent: usize, text: &str) -> String {
    format!("{:indent$}{}", "", text, indent = indent)
}
