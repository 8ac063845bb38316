//! Graphviz rendering of a tableau.

use std::io::{self, Write};

use dot_writer::{Attributes, DotWriter};

use super::{Tableau, Tnode};

impl<'t> Tableau<'t> {
    /// Write the tableau as a directed graph in dot format.
    ///
    /// Every occurrence becomes a vertex labelled `sign: expression`,
    /// suffixed `, U` when used and `, C` when closed, with an edge to
    /// each child.
    pub fn write_dot<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let mut bytes = Vec::new();
        {
            let mut writer = DotWriter::from(&mut bytes);
            let mut graph = writer.digraph();

            for (_, node) in self.iter() {
                let name = vertex_name(node);
                let label = vertex_label(node);
                graph.node_named(name.as_str()).set_label(label.as_str());
            }

            for (_, node) in self.iter() {
                for child in node.left.iter().chain(node.right.iter()) {
                    graph.edge(
                        vertex_name(node).as_str(),
                        vertex_name(self.node(*child)).as_str(),
                    );
                }
            }
        }
        w.write_all(&bytes)
    }
}

fn vertex_name(node: &Tnode) -> String {
    format!("t{}", node.line_number)
}

fn vertex_label(node: &Tnode) -> String {
    let mut label = format!("{}: {}", node.sign, node.expression);
    if node.used {
        label.push_str(", U");
    }
    if node.closed {
        label.push_str(", C");
    }
    label
}
