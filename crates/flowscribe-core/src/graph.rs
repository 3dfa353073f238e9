//! Flowchart graph backed by petgraph::StableDiGraph, keyed by diagram ids

use crate::error::{Result, TranslateError};
use crate::model::*;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use std::collections::HashMap;
use std::fmt::Write as _;

/// The flowchart graph — a directed multigraph whose nodes are addressed by
/// their draw.io cell id.
///
/// Nodes and edges are never removed, so petgraph's index order is insertion
/// order. Adjacency lists are kept alongside the petgraph storage because
/// petgraph walks a node's edges newest-first, and traversal order must follow
/// diagram order.
pub struct Graph {
    inner: StableDiGraph<Node, Edge>,
    index: HashMap<String, NodeIndex>,
    forward: HashMap<NodeIndex, Vec<EdgeIndex>>,
    reverse: HashMap<NodeIndex, Vec<EdgeIndex>>,
    entry: Option<NodeIndex>,
    exits: Vec<NodeIndex>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .field("entry", &self.entry().map(|n| &n.id))
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
            forward: HashMap::new(),
            reverse: HashMap::new(),
            entry: None,
            exits: Vec::new(),
        }
    }

    /// Add a node. Returns `Ok(false)` if the id is already taken (the
    /// existing node is kept) and an error if this would be a second start.
    pub fn add_node(&mut self, node: Node) -> Result<bool> {
        if self.index.contains_key(&node.id) {
            return Ok(false);
        }
        if node.kind == NodeKind::Start {
            if let Some(existing) = self.entry() {
                return Err(TranslateError::MultipleStartNodes {
                    first: existing.id.clone(),
                    second: node.id,
                });
            }
        }

        let id = node.id.clone();
        let kind = node.kind;
        let idx = self.inner.add_node(node);
        self.index.insert(id, idx);
        self.forward.insert(idx, Vec::new());
        self.reverse.insert(idx, Vec::new());

        match kind {
            NodeKind::Start => self.entry = Some(idx),
            NodeKind::End => self.exits.push(idx),
            NodeKind::Process | NodeKind::Decision => {}
        }
        Ok(true)
    }

    /// Add an edge. Returns `false` if either endpoint is unknown.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let (Some(&source), Some(&target)) =
            (self.index.get(&edge.source), self.index.get(&edge.target))
        else {
            return false;
        };
        let idx = self.inner.add_edge(source, target, edge);
        // Lists are created in add_node.
        if let Some(out) = self.forward.get_mut(&source) {
            out.push(idx);
        }
        if let Some(inc) = self.reverse.get_mut(&target) {
            inc.push(idx);
        }
        true
    }

    /// Get a node by diagram id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).and_then(|&idx| self.inner.node_weight(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn edges_from(&self, id: &str) -> impl Iterator<Item = &Edge> {
        self.adjacent(&self.forward, id)
    }

    /// Incoming edges of a node, in insertion order.
    pub fn edges_to(&self, id: &str) -> impl Iterator<Item = &Edge> {
        self.adjacent(&self.reverse, id)
    }

    fn adjacent<'a>(
        &'a self,
        lists: &'a HashMap<NodeIndex, Vec<EdgeIndex>>,
        id: &str,
    ) -> impl Iterator<Item = &'a Edge> {
        self.index
            .get(id)
            .and_then(|idx| lists.get(idx))
            .into_iter()
            .flatten()
            .filter_map(move |&e| self.inner.edge_weight(e))
    }

    /// Successor nodes, optionally restricted to one branch condition.
    pub fn successors(&self, id: &str, condition: Option<Condition>) -> Vec<&Node> {
        self.edges_from(id)
            .filter(|e| condition.map_or(true, |c| e.condition == c))
            .filter_map(|e| self.node(&e.target))
            .collect()
    }

    /// The unique start node, if one was added.
    pub fn entry(&self) -> Option<&Node> {
        self.entry.and_then(|idx| self.inner.node_weight(idx))
    }

    /// All end nodes, in insertion order.
    pub fn exits(&self) -> impl Iterator<Item = &Node> {
        self.exits
            .iter()
            .filter_map(move |&idx| self.inner.node_weight(idx))
    }

    /// First node (insertion order) whose bounds contain the point.
    pub fn node_at(&self, x: f64, y: f64) -> Option<&Node> {
        self.nodes()
            .find(|n| n.bounds.map_or(false, |b| b.contains(x, y)))
    }

    /// Human-readable dump of every node and edge, for debugging.
    pub fn describe(&self) -> String {
        let mut out = String::from("--- Graph Structure ---\n");
        for node in self.nodes() {
            let _ = writeln!(out, "{}: {} ({})", node.id, node.text, node.kind);
        }
        out.push_str("\nEdges:\n");
        for edge in self.edges() {
            let _ = writeln!(
                out,
                "{} -> {} [condition: {}]",
                edge.source, edge.target, edge.condition
            );
        }
        out.push_str("------------------------\n");
        out
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
