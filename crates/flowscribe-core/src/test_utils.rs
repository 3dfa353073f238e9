//! Test utilities for building draw.io documents

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const START_STYLE: &str = "rounded=1;whiteSpace=wrap;html=1;";
pub const PROCESS_STYLE: &str = "rounded=0;whiteSpace=wrap;html=1;";
pub const DECISION_STYLE: &str = "rhombus;whiteSpace=wrap;html=1;";
pub const TRUE_EDGE_STYLE: &str = "edgeStyle=orthogonalEdgeStyle;rounded=0;html=1;";
pub const FALSE_EDGE_STYLE: &str = "edgeStyle=orthogonalEdgeStyle;html=1;strokeColor=#B85450;";

/// Builds an uncompressed `.drawio` document cell by cell.
#[derive(Default)]
pub struct DiagramBuilder {
    cells: String,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex with geometry laid out on a simple grid.
    pub fn vertex(self, id: &str, value: &str, style: &str, x: f64, y: f64) -> Self {
        self.raw_vertex(
            id,
            value,
            style,
            &format!(r#"<mxGeometry x="{x}" y="{y}" width="120" height="60" as="geometry" />"#),
        )
    }

    /// Vertex with caller-supplied geometry markup (possibly empty).
    pub fn raw_vertex(mut self, id: &str, value: &str, style: &str, geometry: &str) -> Self {
        let _ = write!(
            self.cells,
            r#"<mxCell id="{id}" value="{value}" style="{style}" vertex="1" parent="1">{geometry}</mxCell>"#
        );
        self
    }

    pub fn edge(mut self, id: &str, source: &str, target: &str, style: &str) -> Self {
        let _ = write!(
            self.cells,
            r#"<mxCell id="{id}" style="{style}" edge="1" parent="1" source="{source}" target="{target}"><mxGeometry relative="1" as="geometry" /></mxCell>"#
        );
        self
    }

    /// Connector with no `target`, only a dangling target point.
    pub fn point_edge(mut self, id: &str, source: &str, x: &str, y: &str, style: &str) -> Self {
        let _ = write!(
            self.cells,
            r#"<mxCell id="{id}" style="{style}" edge="1" parent="1" source="{source}"><mxGeometry relative="1" as="geometry"><mxPoint x="{x}" y="{y}" as="targetPoint" /></mxGeometry></mxCell>"#
        );
        self
    }

    /// Arbitrary cell markup, for connectors the other helpers cannot express.
    pub fn cell(mut self, markup: &str) -> Self {
        self.cells.push_str(markup);
        self
    }

    pub fn build(self) -> String {
        format!(
            r#"<mxfile host="app.diagrams.net"><diagram id="d" name="Page-1"><mxGraphModel><root><mxCell id="0" /><mxCell id="1" parent="0" />{}</root></mxGraphModel></diagram></mxfile>"#,
            self.cells
        )
    }
}

/// Start → decision "x>0" → (true) increment → End, (false) → End.
pub fn branching_diagram() -> String {
    DiagramBuilder::new()
        .vertex("A", "Start", START_STYLE, 0.0, 0.0)
        .vertex("B", "x&amp;gt;0", DECISION_STYLE, 0.0, 100.0)
        .vertex("C", "increment", PROCESS_STYLE, 200.0, 100.0)
        .vertex("D", "End", START_STYLE, 0.0, 200.0)
        .edge("e1", "A", "B", TRUE_EDGE_STYLE)
        .edge("e2", "B", "C", TRUE_EDGE_STYLE)
        .edge("e3", "B", "D", FALSE_EDGE_STYLE)
        .edge("e4", "C", "D", TRUE_EDGE_STYLE)
        .build()
}

/// Write a diagram into a fresh temporary directory.
pub fn write_diagram(xml: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flowchart.drawio");
    fs::write(&path, xml).unwrap();
    (temp_dir, path)
}
