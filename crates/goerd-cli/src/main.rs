use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use goerd::{Cli, GoerdOptions, log_filter};

fn init_tracing(level: &str) -> goerd_error::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), level)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(args: Cli) -> anyhow::Result<()> {
    let total_start = Instant::now();
    init_tracing(&args.log_level)?;

    let opts = GoerdOptions::from(args);
    let stats = goerd::run(&opts).context("goerd failed")?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, nodes = stats.nodes, edges = stats.edges, "complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "execution failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
