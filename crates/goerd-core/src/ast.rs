//! Abstract model of Go type expressions.
//!
//! Declarations keep their right-hand side as a [`TypeExpr`]; nothing is resolved
//! eagerly. The resolver and the label renderer both interpret the same tree.

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// A (possibly unnamed) member of a struct, interface or parameter list.
///
/// `names` shares one type expression, e.g. `X, Y int` is a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn new(names: Vec<String>, ty: TypeExpr) -> Self {
        Self { names, ty }
    }

    /// An embedded member or an unnamed parameter.
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// Type expression appearing in a declaration, field, parameter or result position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `Point`, `int`, `error`
    Ident(String),
    /// `pkg.Type`
    Selector { pkg: String, name: String },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `...T` in a variadic parameter
    Ellipsis(Box<TypeExpr>),
    /// `[]T` when `len` is `None`, `[N]T` / `[...]T` otherwise
    Array {
        len: Option<String>,
        elem: Box<TypeExpr>,
    },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `func(params) results`
    Func {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    /// `struct { ... }`
    Struct(Vec<Field>),
    /// `interface { ... }`
    Interface(Vec<Field>),
    /// A construct the model does not describe (generic instantiation, union, ...).
    Opaque { kind: String, text: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn selector(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Selector {
            pkg: pkg.into(),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn ellipsis(inner: TypeExpr) -> Self {
        TypeExpr::Ellipsis(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: TypeExpr) -> Self {
        TypeExpr::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            TypeExpr::Ident(_) => "ident",
            TypeExpr::Selector { .. } => "selector",
            TypeExpr::Pointer(_) => "pointer",
            TypeExpr::Ellipsis(_) => "ellipsis",
            TypeExpr::Array { .. } => "array",
            TypeExpr::Map { .. } => "map",
            TypeExpr::Chan { .. } => "chan",
            TypeExpr::Func { .. } => "func",
            TypeExpr::Struct(_) => "struct",
            TypeExpr::Interface(_) => "interface",
            TypeExpr::Opaque { kind, .. } => kind,
        }
    }
}
