//! Graph rendering module for producing DOT format output.
//!
//! Renders a [`Registry`] as one Graphviz digraph: a cluster per package holding a
//! node per declaration, followed by the dependency edges between them.
//!
//! Rendering is two-phase. All nodes are emitted and the [`FlatIndex`] is built from
//! the whole registry first; only then are edges resolved, so an edge may point into
//! any package of the run.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities and the builder
//! - [`index`]: the flattened name index
//! - [`node`]: node shapes and record labels
//! - [`edge`]: dependency edges

pub mod dot;
pub mod edge;
pub mod index;
pub mod node;

use std::io::Write;

use tracing::warn;

use goerd_collect::Registry;
use goerd_error::{Error, Result};

pub use dot::{DotBuilder, NodeShape, escape_label};
pub use edge::{Edge, decl_edges};
pub use index::FlatIndex;

/// Options for graph rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Name of the top-level digraph.
    pub graph_name: String,
    /// Optional Graphviz `rankdir` (e.g. `LR`).
    pub rankdir: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            graph_name: "GoERD".to_string(),
            rankdir: None,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    pub fn with_rankdir(mut self, rankdir: Option<String>) -> Self {
        self.rankdir = rankdir;
        self
    }
}

/// Counters describing a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub packages: usize,
    pub nodes: usize,
    pub edges: usize,
    /// Qualified names of declarations that got no node.
    pub skipped: Vec<String>,
}

/// A rendered DOT document.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub dot: String,
    pub stats: RenderStats,
}

/// Render `registry` to DOT.
///
/// Packages and declarations are emitted in name order, so the output is
/// byte-identical for identical input.
pub fn render(registry: &Registry, options: &RenderOptions) -> Rendered {
    let mut graph = DotBuilder::new(&options.graph_name);
    let mut stats = RenderStats::default();
    if let Some(rankdir) = &options.rankdir {
        graph.attr("rankdir", rankdir);
    }

    // Phase 1: nodes
    let index = FlatIndex::build(registry);
    let mut label = String::new();
    for (package, types) in registry.packages() {
        stats.packages += 1;
        graph.start_cluster(package, package);
        for decl in types.values() {
            match node::node_label(decl, &mut label) {
                Some(shape) => {
                    graph.node(&dot::node_id(package, &decl.name), shape, &label);
                    stats.nodes += 1;
                }
                None => {
                    warn!(
                        "MISSED: {package}.{}: unsupported {} `{}`",
                        decl.name,
                        decl.shape.to_type().kind_name(),
                        decl.shape.type_text()
                    );
                    stats.skipped.push(format!("{package}.{}", decl.name));
                }
            }
        }
        graph.end_cluster();
    }

    // Phase 2: edges
    for (package, types) in registry.packages() {
        for decl in types.values() {
            for edge in decl_edges(package, decl, &index) {
                graph.edge(
                    &format!("node-{}", edge.from),
                    edge.port,
                    &format!("node-{}", edge.to),
                );
                stats.edges += 1;
            }
        }
    }

    Rendered {
        dot: graph.build(),
        stats,
    }
}

/// Render `registry` and write the document to `out`.
pub fn render_to<W: Write>(
    registry: &Registry,
    options: &RenderOptions,
    mut out: W,
) -> Result<RenderStats> {
    let rendered = render(registry, options);
    out.write_all(rendered.dot.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| Error::from(err).with_operation("dot::render_to"))?;
    Ok(rendered.stats)
}
