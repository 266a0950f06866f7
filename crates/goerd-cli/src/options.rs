//! Command-line options for the goerd binary.
//!
//! The flags are grouped the way the pipeline consumes them: [`CollectArgs`] feeds the
//! collector and [`RenderArgs`] feeds the DOT renderer.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use goerd_collect::CollectOptions;
use goerd_dot::RenderOptions;
use goerd_error::{Error, Result};

#[derive(Parser, Debug)]
#[command(
    name = "goerd",
    about = "goerd: draw the named types of Go packages as a Graphviz diagram",
    version
)]
pub struct Cli {
    /// Go package directory to merge into the diagram (repeatable)
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        required = true,
        num_args = 1..,
        action = clap::ArgAction::Append
    )]
    pub paths: Vec<PathBuf>,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub collect: CollectArgs,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Options controlling which packages are read.
#[derive(Args, Debug, Clone, Default)]
pub struct CollectArgs {
    /// Do not visit locally resolvable imports of the given packages.
    #[arg(long = "no-follow-imports")]
    pub no_follow_imports: bool,

    /// Ignore `_test.go` files.
    #[arg(long = "skip-tests")]
    pub skip_tests: bool,
}

/// Options controlling the emitted DOT document.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Name of the top-level digraph
    #[arg(long = "graph-name", value_name = "NAME", default_value = "GoERD")]
    pub graph_name: String,

    /// Graphviz rank direction, e.g. LR or TB
    #[arg(long = "rankdir", value_name = "DIR")]
    pub rankdir: Option<String>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            graph_name: defaults.graph_name,
            rankdir: defaults.rankdir,
        }
    }
}

impl CollectArgs {
    pub fn to_options(&self) -> CollectOptions {
        CollectOptions::new()
            .with_follow_imports(!self.no_follow_imports)
            .with_include_tests(!self.skip_tests)
    }
}

impl RenderArgs {
    pub fn to_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_graph_name(self.graph_name.clone())
            .with_rankdir(self.rankdir.clone())
    }
}

/// Log filter for the subscriber. `rust_log` (the `RUST_LOG` value) wins over `level`.
pub fn log_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return Ok(EnvFilter::builder().parse_lossy(directives));
    }
    let level = LevelFilter::from_str(level).map_err(|err| {
        Error::invalid_argument(format!("invalid log level '{level}'"))
            .with_operation("options::log_filter")
            .with_context("expected", "off, error, warn, info, debug, trace")
            .set_source(err)
    })?;
    Ok(EnvFilter::default().add_directive(level.into()))
}
