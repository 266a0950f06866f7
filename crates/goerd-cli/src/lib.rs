//! goerd command-line interface.
//!
//! Ties the pipeline together: collect the named types of the requested packages,
//! render them as one DOT document and hand the text to [`output::write_output`].
pub mod options;
pub mod output;

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use goerd_collect::{CollectOptions, collect_paths};
use goerd_dot::{RenderOptions, RenderStats, render};
use goerd_error::Result;

pub use options::{Cli, CollectArgs, RenderArgs, log_filter};
pub use output::write_output;

/// Options for running goerd.
#[derive(Debug, Clone, Default)]
pub struct GoerdOptions {
    pub paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub collect: CollectOptions,
    pub render: RenderOptions,
}

impl From<Cli> for GoerdOptions {
    fn from(cli: Cli) -> Self {
        Self {
            collect: cli.collect.to_options(),
            render: cli.render.to_options(),
            paths: cli.paths,
            output: cli.output,
        }
    }
}

/// Collect and render; returns the DOT document and its counters.
pub fn run_main(opts: &GoerdOptions) -> Result<(String, RenderStats)> {
    let (registry, _) = collect_paths(opts.paths.as_slice(), opts.collect.clone())?;

    let render_start = Instant::now();
    let rendered = render(&registry, &opts.render);
    info!(
        nodes = rendered.stats.nodes,
        edges = rendered.stats.edges,
        skipped = rendered.stats.skipped.len(),
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok((rendered.dot, rendered.stats))
}

/// Run the pipeline and write the document where `opts.output` says.
pub fn run(opts: &GoerdOptions) -> Result<RenderStats> {
    let (dot, stats) = run_main(opts)?;
    write_output(&dot, opts.output.as_deref())?;
    Ok(stats)
}
