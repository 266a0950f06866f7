//! Package name to declaration registry.

use std::collections::BTreeMap;

use goerd_core::Declaration;

/// Declarations of one package, keyed (and therefore ordered) by name.
pub type PackageTypes = BTreeMap<String, Declaration>;

/// Every collected package, keyed by package name.
///
/// Both levels are ordered maps, so iterating a registry is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    packages: BTreeMap<String, PackageTypes>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `package` exists, even if it declares no types.
    pub fn ensure_package(&mut self, package: &str) -> &mut PackageTypes {
        self.packages.entry(package.to_string()).or_default()
    }

    /// Insert `decl` into `package`, returning the declaration it replaced.
    pub fn insert(&mut self, package: &str, decl: Declaration) -> Option<Declaration> {
        self.ensure_package(package).insert(decl.name.clone(), decl)
    }

    /// Merge `other` into `self`. Packages with the same name are combined and
    /// declarations from `other` win on a name collision.
    ///
    /// Returns the qualified names that were overwritten.
    pub fn merge(&mut self, other: Registry) -> Vec<String> {
        let mut replaced = Vec::new();
        for (package, types) in other.packages {
            let target = self.ensure_package(&package);
            for (name, decl) in types {
                if target.insert(name.clone(), decl).is_some() {
                    replaced.push(format!("{package}.{name}"));
                }
            }
        }
        replaced
    }

    pub fn package(&self, name: &str) -> Option<&PackageTypes> {
        self.packages.get(name)
    }

    pub fn get(&self, package: &str, name: &str) -> Option<&Declaration> {
        self.packages.get(package).and_then(|types| types.get(name))
    }

    pub fn packages(&self) -> impl Iterator<Item = (&str, &PackageTypes)> {
        self.packages
            .iter()
            .map(|(name, types)| (name.as_str(), types))
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Total number of declarations across all packages.
    pub fn len(&self) -> usize {
        self.packages.values().map(|types| types.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
