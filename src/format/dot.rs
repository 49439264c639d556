//! Renders a graph in the DOT language for Graphviz.

use std::io::Write;
use std::path::Path;

use crate::graph::Digraph;
use crate::types::{DigraphResult, Label};

/// Writer for DOT graph descriptions.
///
/// Output is a `digraph {` header, one ` v;` line per vertex, one
/// ` u -> v;` line per edge and a closing `}` line. Vertices and edges
/// follow the graph's key order.
pub struct DotWriter;

impl DotWriter {
    /// Render using the vertex type's [`Label`].
    pub fn render<T: Ord + Clone + Label>(graph: &Digraph<T>) -> String {
        Self::render_with(graph, |u| u.label())
    }

    /// Render using an explicit conversion to text.
    pub fn render_with<T, F>(graph: &Digraph<T>, label: F) -> String
    where
        T: Ord + Clone,
        F: Fn(&T) -> String,
    {
        let mut out = String::from("digraph {\n");
        for u in graph.vertices() {
            out.push_str(&format!(" {};\n", label(u)));
        }
        for (u, v) in graph.edges() {
            out.push_str(&format!(" {} -> {};\n", label(u), label(v)));
        }
        out.push_str("}\n");
        out
    }

    /// Write the rendering to any writer.
    pub fn write_to<T: Ord + Clone + Label>(
        graph: &Digraph<T>,
        writer: &mut impl Write,
    ) -> DigraphResult<()> {
        writer.write_all(Self::render(graph).as_bytes())?;
        Ok(())
    }

    /// Write the rendering to a file.
    pub fn write_to_file<T: Ord + Clone + Label>(
        graph: &Digraph<T>,
        path: &Path,
    ) -> DigraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: Ord + Clone + Label> Digraph<T> {
    /// The graph as a DOT description.
    pub fn graphviz(&self) -> String {
        DotWriter::render(self)
    }
}
