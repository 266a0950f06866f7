//! The declaration collector.
//!
//! Collection runs in two phases:
//!
//! 1. **Merge set**: every directory named by the caller is parsed and its type
//!    declarations are merged into the returned [`Registry`].
//! 2. **Visit set**: imports of visited directories that map to local directories
//!    are parsed too, transitively. Their declarations are discarded; visiting only
//!    surfaces parse errors in the code the analyzed packages depend on.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use goerd_core::syntax::lower_type_spec;
use goerd_core::{Declaration, Descend, GoParser, Node, SourceFile, SyntaxVisitor, walk};
use goerd_error::{Error, Result};

use crate::discovery::go_files;
use crate::module::{GoModule, resolve_import};
use crate::registry::Registry;

/// Options controlling which files and packages are parsed.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Parse local packages imported by the analyzed ones.
    pub follow_imports: bool,
    /// Include `_test.go` files.
    pub include_tests: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            follow_imports: true,
            include_tests: true,
        }
    }
}

impl CollectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_follow_imports(mut self, follow_imports: bool) -> Self {
        self.follow_imports = follow_imports;
        self
    }

    pub fn with_include_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }
}

/// What a collection run touched.
#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    /// Directories whose declarations were merged into the registry.
    pub merged: Vec<PathBuf>,
    /// Directories parsed only because they were imported.
    pub visited: Vec<PathBuf>,
    /// Number of Go files parsed.
    pub files: usize,
    /// Imports with no local directory (standard library, third party).
    pub external_imports: usize,
}

/// Type declarations and imports found in one directory.
struct DirScan {
    registry: Registry,
    imports: Vec<String>,
}

pub struct Collector {
    options: CollectOptions,
    parser: GoParser,
    visited: HashSet<PathBuf>,
    modules: HashMap<PathBuf, Option<GoModule>>,
    report: CollectReport,
}

impl Collector {
    pub fn new(options: CollectOptions) -> Result<Self> {
        Ok(Self {
            options,
            parser: GoParser::new()?,
            visited: HashSet::new(),
            modules: HashMap::new(),
            report: CollectReport::default(),
        })
    }

    pub fn report(&self) -> &CollectReport {
        &self.report
    }

    pub fn into_report(self) -> CollectReport {
        self.report
    }

    /// Collect the declarations of every directory in `paths`.
    ///
    /// A package name produced by several paths has its declarations merged, the
    /// later path winning on a name collision.
    pub fn collect<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<Registry> {
        let start = Instant::now();
        let mut registry = Registry::new();
        let mut pending = VecDeque::new();

        for path in paths {
            let dir = canonical_dir(path.as_ref())?;
            self.visited.insert(dir.clone());

            let scan = self.inspect_dir(&dir)?;
            pending.extend(self.local_imports(&dir, &scan.imports)?);

            for name in registry.merge(scan.registry) {
                warn!("{name} declared by more than one input path, keeping the last");
            }
            self.report.merged.push(dir);
        }

        if self.options.follow_imports {
            self.visit_imports(pending)?;
        }

        info!(
            "Collection: {:.2}s ({} files, {} packages, {} types, {} imported dirs)",
            start.elapsed().as_secs_f64(),
            self.report.files,
            registry.package_count(),
            registry.len(),
            self.report.visited.len()
        );
        Ok(registry)
    }

    /// Parse imported directories breadth-first, each at most once.
    fn visit_imports(&mut self, mut pending: VecDeque<PathBuf>) -> Result<()> {
        while let Some(dir) = pending.pop_front() {
            if !self.visited.insert(dir.clone()) {
                continue;
            }
            debug!("visiting imported package {}", dir.display());

            let scan = self.inspect_dir(&dir)?;
            pending.extend(self.local_imports(&dir, &scan.imports)?);
            self.report.visited.push(dir);
        }
        Ok(())
    }

    /// Map `imports` seen in `dir` to canonical local directories.
    fn local_imports(&mut self, dir: &Path, imports: &[String]) -> Result<Vec<PathBuf>> {
        if !self.options.follow_imports {
            return Ok(Vec::new());
        }

        let module = self.module_for(dir)?;
        let mut dirs = Vec::new();
        for import in imports {
            let Some(target) = resolve_import(dir, module.as_ref(), import) else {
                debug!("skipping external import {import}");
                self.report.external_imports += 1;
                continue;
            };
            let target = canonical_dir(&target).map_err(|err| {
                err.with_operation("collect::local_imports")
                    .with_context("import", import.clone())
                    .with_context("importer", dir.display().to_string())
            })?;
            dirs.push(target);
        }
        Ok(dirs)
    }

    fn module_for(&mut self, dir: &Path) -> Result<Option<GoModule>> {
        if let Some(module) = self.modules.get(dir) {
            return Ok(module.clone());
        }
        let module = GoModule::find(dir)?;
        self.modules.insert(dir.to_path_buf(), module.clone());
        Ok(module)
    }

    /// Parse every Go file in `dir` and record its type declarations.
    fn inspect_dir(&mut self, dir: &Path) -> Result<DirScan> {
        let files = go_files(dir, self.options.include_tests)?;
        let mut scan = DirScan {
            registry: Registry::new(),
            imports: Vec::new(),
        };
        if files.is_empty() {
            warn!("no Go source files in {}", dir.display());
            return Ok(scan);
        }

        for path in files {
            info!("File: {}", path.display());
            let source = SourceFile::new_path(&path).map_err(|err| {
                Error::from(err)
                    .with_operation("collect::inspect_dir")
                    .with_context("file", path.display().to_string())
            })?;
            let parsed = self
                .parser
                .parse(&source)
                .map_err(|err| err.with_operation("collect::inspect_dir"))?;
            let Some(package) = parsed.package.clone() else {
                return Err(Error::syntax_error("expected 'package' clause")
                    .with_operation("collect::inspect_dir")
                    .with_context("file", path.display().to_string()));
            };
            self.report.files += 1;

            let mut collector = DeclCollector {
                file: &parsed.file,
                decls: Vec::new(),
            };
            walk(parsed.root(), &mut collector);

            scan.registry.ensure_package(&package);
            for decl in collector.decls {
                record(&mut scan.registry, &package, decl);
            }
            scan.imports.extend(parsed.imports);
        }
        Ok(scan)
    }
}

fn record(registry: &mut Registry, package: &str, decl: Declaration) {
    let file = decl.file.clone();
    if let Some(previous) = registry.insert(package, decl) {
        warn!(
            "{package}.{} redeclared ({} and {}), keeping the last",
            previous.name,
            previous.file.as_deref().unwrap_or("?"),
            file.as_deref().unwrap_or("?")
        );
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|err| {
        Error::from(err)
            .with_operation("collect::canonical_dir")
            .with_context("path", path.display().to_string())
    })
}

/// Gathers type declarations without descending into them or into comments.
struct DeclCollector<'f> {
    file: &'f SourceFile,
    decls: Vec<Declaration>,
}

impl<'t> SyntaxVisitor<'t> for DeclCollector<'_> {
    fn visit(&mut self, node: Node<'t>) -> Descend {
        match node.kind() {
            "comment" => Descend::Skip,
            "type_spec" | "type_alias" => {
                if let Some(decl) = lower_type_spec(node, self.file) {
                    self.decls.push(decl);
                }
                Descend::Skip
            }
            _ => Descend::Children,
        }
    }
}

/// Collect `paths` with a fresh [`Collector`].
pub fn collect_paths<P: AsRef<Path>>(
    paths: &[P],
    options: CollectOptions,
) -> Result<(Registry, CollectReport)> {
    let mut collector = Collector::new(options)?;
    let registry = collector.collect(paths)?;
    Ok((registry, collector.into_report()))
}
