//! `go.mod` lookup and import path resolution.
//!
//! Only imports that live on disk next to the analyzed code can be followed: paths
//! under the enclosing module's path, and relative `./` / `../` imports. Standard
//! library and third-party imports resolve to nothing.

use std::fs;
use std::path::{Path, PathBuf};

use goerd_error::{Error, Result};

/// The module declared by a `go.mod` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    /// Directory holding `go.mod`.
    pub root: PathBuf,
    /// Module path from the `module` directive.
    pub path: String,
}

impl GoModule {
    /// Find the `go.mod` governing `dir` by walking up its ancestors.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        for ancestor in dir.ancestors() {
            let manifest = ancestor.join("go.mod");
            if !manifest.is_file() {
                continue;
            }
            let contents = fs::read_to_string(&manifest).map_err(|err| {
                Error::from(err)
                    .with_operation("module::find")
                    .with_context("path", manifest.display().to_string())
            })?;
            return Ok(Self::parse(ancestor, &contents));
        }
        Ok(None)
    }

    /// Read the `module` directive out of `go.mod` contents.
    pub fn parse(root: &Path, contents: &str) -> Option<Self> {
        contents.lines().find_map(|line| {
            let line = line.split("//").next().unwrap_or("").trim();
            let rest = line.strip_prefix("module")?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let path = rest.trim().trim_matches(|c| c == '"' || c == '`');
            (!path.is_empty()).then(|| GoModule {
                root: root.to_path_buf(),
                path: path.to_string(),
            })
        })
    }

    /// Map an import path under this module to its directory.
    pub fn import_dir(&self, import: &str) -> Option<PathBuf> {
        if import == self.path {
            return Some(self.root.clone());
        }
        let rest = import.strip_prefix(&self.path)?.strip_prefix('/')?;
        Some(self.root.join(rest))
    }
}

/// Map an import seen in `dir` to a local directory, if it has one.
pub(crate) fn resolve_import(dir: &Path, module: Option<&GoModule>, import: &str) -> Option<PathBuf> {
    if import.starts_with("./") || import.starts_with("../") {
        return Some(dir.join(import));
    }
    module.and_then(|module| module.import_dir(import))
}
