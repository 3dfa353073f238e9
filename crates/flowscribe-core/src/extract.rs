//! draw.io XML → flowchart graph
//!
//! Two passes over every `mxCell` in the document: vertices are classified
//! into nodes first, then connectors are resolved into edges. Connectors
//! whose `target` is missing fall back to the geometry of pass-one nodes, so
//! the order matters.

use crate::diagnostics::Diagnostics;
use crate::error::{Result, TranslateError};
use crate::graph::Graph;
use crate::model::{Bounds, Condition, Edge, Node, NodeKind};
use crate::style::parse_style;
use roxmltree::{Document, Node as XmlNode};
use std::path::Path;

/// Stroke colour marking the negative branch of a decision.
pub const FALSE_BRANCH_COLOR: &str = "#b85450";

const CELL_TAG: &str = "mxCell";
const GEOMETRY_TAG: &str = "mxGeometry";
const POINT_TAG: &str = "mxPoint";

/// A populated graph plus everything that was dropped or degraded on the way.
#[derive(Debug)]
pub struct Extraction {
    pub graph: Graph,
    pub diagnostics: Diagnostics,
}

/// Read and extract a diagram file.
pub fn extract_file(path: impl AsRef<Path>) -> Result<Extraction> {
    let path = path.as_ref();
    tracing::info!("Parsing diagram file: {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract(&xml)
}

/// Extract a graph from diagram XML.
pub fn extract(xml: &str) -> Result<Extraction> {
    let doc = Document::parse(xml)
        .inspect_err(|e| tracing::error!("Invalid XML format: {}", e))?;
    let mut graph = Graph::new();
    let mut diagnostics = Diagnostics::new();

    let cells: Vec<XmlNode<'_, '_>> = doc
        .descendants()
        .filter(|n| n.has_tag_name(CELL_TAG))
        .collect();

    for cell in cells.iter().filter(|c| c.attribute("vertex") == Some("1")) {
        add_vertex(*cell, &mut graph, &mut diagnostics)?;
    }
    for cell in cells.iter().filter(|c| c.attribute("edge") == Some("1")) {
        add_connector(*cell, &mut graph, &mut diagnostics);
    }

    if graph.entry().is_none() {
        tracing::error!("No start node found in diagram");
        return Err(TranslateError::MissingStartNode);
    }
    if graph.exits().next().is_none() {
        diagnostics.warn("No end nodes found in diagram");
    }

    tracing::debug!(
        "Extracted {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(Extraction { graph, diagnostics })
}

fn add_vertex(cell: XmlNode<'_, '_>, graph: &mut Graph, diags: &mut Diagnostics) -> Result<()> {
    let Some(id) = non_empty(cell.attribute("id")) else {
        diags.warn("Vertex missing ID, skipping");
        return Ok(());
    };

    let raw_label = cell.attribute("value").unwrap_or_default().trim();
    let kind = classify(cell.attribute("style").unwrap_or_default(), raw_label);
    let label = decode_label(raw_label);

    let mut node = Node::new(id, label, kind);
    if let Some(geom) = child(cell, GEOMETRY_TAG) {
        match parse_bounds(geom) {
            Ok(bounds) => node = node.with_bounds(bounds),
            Err(e) => diags.warn(format!("Invalid geometry for node {id}: {e}")),
        }
    }

    if !graph.add_node(node)? {
        diags.warn(format!("Duplicate node ID {id} detected"));
        return Ok(());
    }
    match kind {
        NodeKind::Start => tracing::info!("Start node identified: {id}"),
        NodeKind::End => tracing::info!("End node identified: {id}"),
        NodeKind::Process | NodeKind::Decision => tracing::debug!("Added {kind} node: {id}"),
    }
    Ok(())
}

fn add_connector(cell: XmlNode<'_, '_>, graph: &mut Graph, diags: &mut Diagnostics) {
    let source = non_empty(cell.attribute("source"));
    let target = match non_empty(cell.attribute("target")) {
        Some(target) => Some(target.to_string()),
        None => resolve_target_point(cell, graph, diags),
    };

    let (Some(source), Some(target)) = (source, target.as_deref()) else {
        diags.warn(format!(
            "Incomplete edge {}: src={}, dst={}",
            cell.attribute("id").unwrap_or("?"),
            source.unwrap_or("None"),
            target.as_deref().unwrap_or("None"),
        ));
        return;
    };

    let style = parse_style(cell.attribute("style").unwrap_or_default());
    let condition = if style.is("strokecolor", FALSE_BRANCH_COLOR) {
        Condition::False
    } else {
        Condition::True
    };

    let edge = Edge::new(source, target, condition);
    if !graph.add_edge(edge.clone()) {
        if !graph.contains(&edge.source) {
            diags.error(format!("Edge source node {} not found", edge.source));
        } else {
            diags.error(format!("Edge target node {} not found", edge.target));
        }
        return;
    }
    tracing::debug!(
        "Added edge: {} -> {} ({})",
        edge.source,
        edge.target,
        edge.condition
    );
}

/// Classify a shape from its raw style string and undecoded label.
///
/// Start/end matching runs before entity decoding, so `&nbsp;End` stays a
/// process box.
///
/// The rhombus check is a substring match on the whole style because draw.io
/// writes it as a bare token (`rhombus;whiteSpace=wrap;`), which the key/value
/// parser drops.
pub fn classify(raw_style: &str, label: &str) -> NodeKind {
    if raw_style.to_lowercase().contains("rhombus") {
        return NodeKind::Decision;
    }
    if parse_style(raw_style).is("rounded", "1") {
        return match label.trim().to_lowercase().as_str() {
            "start" => NodeKind::Start,
            "end" => NodeKind::End,
            _ => NodeKind::Process,
        };
    }
    NodeKind::Process
}

/// Decode HTML entities in an already trimmed label. XML-level escapes have
/// been resolved by the parser. The result is not trimmed again.
fn decode_label(raw: &str) -> String {
    html_escape::decode_html_entities(raw).into_owned()
}

fn resolve_target_point(
    cell: XmlNode<'_, '_>,
    graph: &Graph,
    diags: &mut Diagnostics,
) -> Option<String> {
    let point = child(cell, GEOMETRY_TAG)?
        .children()
        .find(|n| n.has_tag_name(POINT_TAG) && n.attribute("as") == Some("targetPoint"))?;

    let (x, y) = match (coord(point, "x"), coord(point, "y")) {
        (Ok(x), Ok(y)) => (x, y),
        _ => {
            diags.warn("Invalid target point coordinates");
            return None;
        }
    };

    let node = graph.node_at(x, y)?;
    tracing::debug!("Resolved target point ({x}, {y}) to node {}", node.id);
    Some(node.id.clone())
}

fn parse_bounds(geom: XmlNode<'_, '_>) -> std::result::Result<Bounds, std::num::ParseFloatError> {
    Ok(Bounds {
        x: coord(geom, "x")?,
        y: coord(geom, "y")?,
        width: coord(geom, "width")?,
        height: coord(geom, "height")?,
    })
}

/// Numeric attribute, defaulting to 0 when absent.
fn coord(node: XmlNode<'_, '_>, name: &str) -> std::result::Result<f64, std::num::ParseFloatError> {
    node.attribute(name).map_or(Ok(0.0), |v| v.trim().parse())
}

fn child<'a, 'input>(node: XmlNode<'a, 'input>, tag: &str) -> Option<XmlNode<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
