//! Output of the rendered DOT document.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use goerd_error::{Error, Result};

/// Write `dot` to `path`, or to stdout when no path is given.
pub fn write_output(dot: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, dot).map_err(|err| {
                Error::from(err)
                    .with_operation("output::write_output")
                    .with_context("path", path.display().to_string())
            })?;
            info!(path = %path.display(), bytes = dot.len(), "output written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(dot.as_bytes())
                .and_then(|()| lock.flush())
                .map_err(|err| Error::from(err).with_operation("output::write_output"))?;
        }
    }
    Ok(())
}
