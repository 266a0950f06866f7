//! Edge statements: resolved dependencies that land on a known declaration.

use goerd_core::resolve::resolve_field;
use goerd_core::{DeclShape, Declaration, dedup, resolve};

use crate::index::FlatIndex;

/// A dependency edge from compartment `port` of `from` to the node `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Qualified name of the source declaration.
    pub from: String,
    pub port: usize,
    /// Qualified name of the target declaration.
    pub to: String,
}

/// Edges leaving `decl`, declared in `package`, in emission order.
///
/// Channel and function declarations resolve as a whole; the i-th distinct name
/// attaches to port `f<i>`. Interface and struct compartments resolve one by one.
pub fn decl_edges(package: &str, decl: &Declaration, index: &FlatIndex<'_>) -> Vec<Edge> {
    let from = format!("{package}.{}", decl.name);
    let mut edges = Vec::new();
    let mut push = |port: usize, name: &str| {
        let target = qualify(package, name);
        if index.contains(&target) {
            edges.push(Edge {
                from: from.clone(),
                port,
                to: target,
            });
        }
    };

    match &decl.shape {
        DeclShape::Chan { .. } | DeclShape::Func { .. } => {
            let names = dedup(resolve(&decl.shape.to_type()));
            for (port, name) in names.iter().enumerate() {
                push(port, name);
            }
        }
        DeclShape::Interface(members) | DeclShape::Struct(members) => {
            for (port, member) in members.iter().enumerate() {
                for name in dedup(resolve_field(member)) {
                    push(port, &name);
                }
            }
        }
        DeclShape::Alias(_)
        | DeclShape::QualifiedAlias { .. }
        | DeclShape::Array { .. }
        | DeclShape::Map { .. }
        | DeclShape::Unsupported(_) => {}
    }
    edges
}

/// `Point` seen in package `geo` means `geo.Point`; `model.Item` stays as is.
pub fn qualify(package: &str, name: &str) -> String {
    if name.contains('.') {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
