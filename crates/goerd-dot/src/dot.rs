//! DOT format utilities for graph rendering.

use std::fmt::Write;

use goerd_core::DeclShape;

/// Characters that are backslash-escaped inside node labels.
pub const ESCAPED: &[char] = &[
    '\\', ' ', '\'', '`', '"', '[', ']', '{', '}', '(', ')', '*', '<', '>', '|',
];

/// Node shapes used by the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Ellipse,
    Box,
    Rectangle,
    Record,
    Mrecord,
}

impl NodeShape {
    /// Shape of the node drawn for `shape`, `None` when it has no node form.
    pub fn for_decl(shape: &DeclShape) -> Option<Self> {
        match shape {
            DeclShape::Alias(_) | DeclShape::QualifiedAlias { .. } => Some(NodeShape::Ellipse),
            DeclShape::Chan { .. } => Some(NodeShape::Box),
            DeclShape::Func { .. } | DeclShape::Array { .. } | DeclShape::Map { .. } => {
                Some(NodeShape::Rectangle)
            }
            DeclShape::Interface(_) => Some(NodeShape::Mrecord),
            DeclShape::Struct(_) => Some(NodeShape::Record),
            DeclShape::Unsupported(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Ellipse => "ellipse",
            NodeShape::Box => "box",
            NodeShape::Rectangle => "rectangle",
            NodeShape::Record => "record",
            NodeShape::Mrecord => "Mrecord",
        }
    }
}

/// Backslash-escape every character of [`ESCAPED`] in `input`; newlines become `\n`.
pub fn escape_label(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            ch if ESCAPED.contains(&ch) => {
                out.push('\\');
                out.push(ch);
            }
            ch => out.push(ch),
        }
    }
    out
}

/// Escape a plain quoted attribute value (cluster labels, graph attributes).
pub fn escape_attr(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Node id of `name` declared in `package`.
pub fn node_id(package: &str, name: &str) -> String {
    format!("node-{package}.{name}")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new DOT graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph \"{}\" {{", escape_attr(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_attr(value));
        self
    }

    /// Add a node; `label` must already be escaped.
    pub fn node(&mut self, id: &str, shape: NodeShape, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(
            self.output,
            "\"{}\" [shape={},label=\"{}\"];",
            id,
            shape.as_str(),
            label
        );
        self
    }

    /// Add an edge leaving port `f<port>` of `from`.
    pub fn edge(&mut self, from: &str, port: usize, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "\"{from}\":f{port} -> \"{to}\";");
        self
    }

    /// Start a subgraph cluster.
    pub fn start_cluster(&mut self, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "subgraph \"cluster_{}\" {{", escape_attr(id));
        self.indent += 1;
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "label=\"{}\";", escape_attr(label));
        self
    }

    /// End the current subgraph cluster.
    pub fn end_cluster(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}
