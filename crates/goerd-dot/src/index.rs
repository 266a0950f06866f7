//! Run-wide lookup table over every collected declaration.

use std::collections::HashMap;

use goerd_collect::Registry;
use goerd_core::Declaration;

/// Every declaration reachable by bare name and by `package.Name`.
///
/// Built once from the full registry before any edge is emitted. Bare names that
/// occur in several packages keep the one from the last package in name order.
pub struct FlatIndex<'r> {
    entries: HashMap<String, &'r Declaration>,
}

impl<'r> FlatIndex<'r> {
    pub fn build(registry: &'r Registry) -> Self {
        let mut entries = HashMap::with_capacity(registry.len() * 2);
        for (package, types) in registry.packages() {
            for (name, decl) in types {
                entries.insert(name.clone(), decl);
                entries.insert(format!("{package}.{name}"), decl);
            }
        }
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goerd_core::TypeExpr;

    #[test]
    fn indexes_bare_and_qualified_names() {
        let mut registry = Registry::new();
        registry.insert("a", Declaration::new("Config", TypeExpr::ident("int")));
        registry.insert("b", Declaration::new("Config", TypeExpr::ident("string")));
        registry.insert("b", Declaration::new("Only", TypeExpr::ident("bool")));

        let index = FlatIndex::build(&registry);
        assert_eq!(index.len(), 5);
        assert!(index.contains("a.Config"));
        assert!(index.contains("b.Config"));
        assert!(index.contains("Config"));
        assert!(index.contains("Only"));
        assert!(index.contains("b.Only"));
        assert!(!index.contains("a.Only"));
        assert!(!index.contains("error"));
    }
}
