//! Named type declarations and their shape classification.

use crate::ast::{ChanDir, Field, TypeExpr};
use crate::text::type_text;

/// The structural kind of a declaration's right-hand side.
///
/// Everything the diagram has no node form for (pointers, generic instantiations,
/// unions, ...) lands in `Unsupported` so the renderer can report and skip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclShape {
    /// `type A B`
    Alias(String),
    /// `type A pkg.B`
    QualifiedAlias { pkg: String, name: String },
    Chan {
        dir: ChanDir,
        elem: TypeExpr,
    },
    Func {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    Array {
        len: Option<String>,
        elem: TypeExpr,
    },
    Map {
        key: TypeExpr,
        value: TypeExpr,
    },
    /// One field per method (named, with a `Func` type) or embedded interface.
    Interface(Vec<Field>),
    /// One field per field group.
    Struct(Vec<Field>),
    Unsupported(TypeExpr),
}

impl DeclShape {
    pub fn from_type(expr: TypeExpr) -> Self {
        match expr {
            TypeExpr::Ident(name) => DeclShape::Alias(name),
            TypeExpr::Selector { pkg, name } => DeclShape::QualifiedAlias { pkg, name },
            TypeExpr::Chan { dir, elem } => DeclShape::Chan { dir, elem: *elem },
            TypeExpr::Func { params, results } => DeclShape::Func { params, results },
            TypeExpr::Array { len, elem } => DeclShape::Array { len, elem: *elem },
            TypeExpr::Map { key, value } => DeclShape::Map {
                key: *key,
                value: *value,
            },
            TypeExpr::Interface(methods) => DeclShape::Interface(methods),
            TypeExpr::Struct(fields) => DeclShape::Struct(fields),
            other @ (TypeExpr::Pointer(_) | TypeExpr::Ellipsis(_) | TypeExpr::Opaque { .. }) => {
                DeclShape::Unsupported(other)
            }
        }
    }

    /// Rebuild the type expression this shape was classified from.
    pub fn to_type(&self) -> TypeExpr {
        match self {
            DeclShape::Alias(name) => TypeExpr::Ident(name.clone()),
            DeclShape::QualifiedAlias { pkg, name } => TypeExpr::selector(pkg, name),
            DeclShape::Chan { dir, elem } => TypeExpr::chan(*dir, elem.clone()),
            DeclShape::Func { params, results } => TypeExpr::Func {
                params: params.clone(),
                results: results.clone(),
            },
            DeclShape::Array { len, elem } => TypeExpr::Array {
                len: len.clone(),
                elem: Box::new(elem.clone()),
            },
            DeclShape::Map { key, value } => TypeExpr::map(key.clone(), value.clone()),
            DeclShape::Interface(methods) => TypeExpr::Interface(methods.clone()),
            DeclShape::Struct(fields) => TypeExpr::Struct(fields.clone()),
            DeclShape::Unsupported(expr) => expr.clone(),
        }
    }

    /// Label text of the right-hand side, e.g. `func(Point) (error)`.
    pub fn type_text(&self) -> String {
        match self {
            DeclShape::Alias(name) => name.clone(),
            other => type_text(&other.to_type()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclShape::Alias(_) => "alias",
            DeclShape::QualifiedAlias { .. } => "qualified alias",
            DeclShape::Chan { .. } => "chan",
            DeclShape::Func { .. } => "func",
            DeclShape::Array { .. } => "array",
            DeclShape::Map { .. } => "map",
            DeclShape::Interface(_) => "interface",
            DeclShape::Struct(_) => "struct",
            DeclShape::Unsupported(_) => "unsupported",
        }
    }
}

/// One named type inside a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub shape: DeclShape,
    /// `type A = B` rather than `type A B`.
    pub alias: bool,
    /// File the declaration came from, when known.
    pub file: Option<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            shape: DeclShape::from_type(ty),
            alias: false,
            file: None,
        }
    }

    pub fn with_alias(mut self, alias: bool) -> Self {
        self.alias = alias;
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_recognized_shapes() {
        let decl = Declaration::new("ID", TypeExpr::ident("string"));
        assert_eq!(decl.shape, DeclShape::Alias("string".into()));

        let decl = Declaration::new("Clock", TypeExpr::selector("time", "Time"));
        assert_eq!(decl.shape.kind_name(), "qualified alias");

        let decl = Declaration::new("Points", TypeExpr::slice(TypeExpr::ident("Point")));
        assert!(matches!(decl.shape, DeclShape::Array { len: None, .. }));

        let decl = Declaration::new("Point", TypeExpr::Struct(Vec::new()));
        assert!(matches!(decl.shape, DeclShape::Struct(ref fields) if fields.is_empty()));
    }

    #[test]
    fn pointer_and_opaque_are_unsupported() {
        let decl = Declaration::new("Ref", TypeExpr::pointer(TypeExpr::ident("Node")));
        assert!(matches!(decl.shape, DeclShape::Unsupported(TypeExpr::Pointer(_))));

        let decl = Declaration::new(
            "Ints",
            TypeExpr::Opaque {
                kind: "generic_type".into(),
                text: "List[int]".into(),
            },
        );
        assert_eq!(decl.shape.kind_name(), "unsupported");
        assert_eq!(decl.shape.type_text(), "List[int]");
    }

    #[test]
    fn type_text_round_trips_through_shape() {
        let ty = TypeExpr::map(TypeExpr::ident("string"), TypeExpr::pointer(TypeExpr::ident("User")));
        let decl = Declaration::new("Users", ty.clone());
        assert_eq!(decl.shape.to_type(), ty);
        assert_eq!(decl.shape.type_text(), "map[string]*User");
    }
}
