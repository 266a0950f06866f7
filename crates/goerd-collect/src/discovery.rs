//! Go source discovery within a single package directory.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use goerd_error::{Error, ErrorKind, Result};

/// Is `path` a Go source file we should parse?
fn is_go_file(path: &Path, include_tests: bool) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.ends_with(".go") {
        return false;
    }
    include_tests || !name.ends_with("_test.go")
}

/// List the `.go` files directly inside `dir`, sorted by file name.
///
/// Sub-directories are separate Go packages and are not descended into.
pub fn go_files(dir: &Path, include_tests: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::file_not_found(dir.display().to_string())
            .with_operation("discovery::go_files"));
    }

    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|e| {
            Error::new(ErrorKind::TraversalFailed, e.to_string())
                .with_operation("discovery::go_files")
                .with_context("path", dir.display().to_string())
                .set_source(e)
        })?;

        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        if is_go_file(entry.path(), include_tests) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_only_top_level_go_files() {
        let temp = tempdir().expect("create temp dir");
        let dir = temp.path();
        fs::write(dir.join("b.go"), "package p\n").unwrap();
        fs::write(dir.join("a.go"), "package p\n").unwrap();
        fs::write(dir.join("a_test.go"), "package p\n").unwrap();
        fs::write(dir.join("notes.txt"), "not go").unwrap();
        fs::create_dir(dir.join("sub")).unwrap();
        fs::write(dir.join("sub").join("c.go"), "package sub\n").unwrap();

        let names = |files: Vec<PathBuf>| -> Vec<String> {
            files
                .iter()
                .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };

        let all = go_files(dir, true).unwrap();
        assert_eq!(names(all), vec!["a.go", "a_test.go", "b.go"]);

        let without_tests = go_files(dir, false).unwrap();
        assert_eq!(names(without_tests), vec!["a.go", "b.go"]);
    }

    #[test]
    fn missing_directory_is_not_found() {
        let temp = tempdir().expect("create temp dir");
        let err = go_files(&temp.path().join("nope"), true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
