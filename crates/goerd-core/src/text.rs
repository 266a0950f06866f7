//! Go-like source text for type expressions, used in node labels.

use std::fmt::Write;

use crate::ast::{ChanDir, Field, TypeExpr};

/// Render `expr` the way it reads in a node label.
///
/// Parameter names are dropped from function signatures, and inline struct or
/// interface literals collapse to `struct {}` / `interface{}`.
pub fn type_text(expr: &TypeExpr) -> String {
    let mut out = String::new();
    write_type(&mut out, expr);
    out
}

fn write_type(out: &mut String, expr: &TypeExpr) {
    match expr {
        TypeExpr::Ident(name) => out.push_str(name),
        TypeExpr::Selector { pkg, name } => {
            let _ = write!(out, "{pkg}.{name}");
        }
        TypeExpr::Pointer(inner) => {
            out.push('*');
            write_type(out, inner);
        }
        TypeExpr::Ellipsis(inner) => {
            out.push_str("...");
            write_type(out, inner);
        }
        TypeExpr::Array { len, elem } => {
            let _ = write!(out, "[{}]", len.as_deref().unwrap_or(""));
            write_type(out, elem);
        }
        TypeExpr::Map { key, value } => {
            out.push_str("map[");
            write_type(out, key);
            out.push(']');
            write_type(out, value);
        }
        TypeExpr::Chan { dir, elem } => {
            out.push_str(match dir {
                ChanDir::Both => "chan ",
                ChanDir::Send => "chan<- ",
                ChanDir::Recv => "<-chan ",
            });
            write_type(out, elem);
        }
        TypeExpr::Func { params, results } => write_signature(out, params, results),
        TypeExpr::Struct(_) => out.push_str("struct {}"),
        TypeExpr::Interface(_) => out.push_str("interface{}"),
        TypeExpr::Opaque { text, .. } => out.push_str(text),
    }
}

fn write_signature(out: &mut String, params: &[Field], results: &[Field]) {
    out.push_str("func(");
    write_field_types(out, params);
    out.push(')');

    if !results.is_empty() {
        out.push_str(" (");
        write_field_types(out, results);
        out.push(')');
    }
}

fn write_field_types(out: &mut String, fields: &[Field]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_type(out, &field.ty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> TypeExpr {
        TypeExpr::ident(name)
    }

    #[test]
    fn renders_wrappers() {
        assert_eq!(type_text(&TypeExpr::pointer(ident("Point"))), "*Point");
        assert_eq!(type_text(&TypeExpr::slice(ident("byte"))), "[]byte");
        assert_eq!(
            type_text(&TypeExpr::Array {
                len: Some("4".into()),
                elem: Box::new(ident("int")),
            }),
            "[4]int"
        );
        assert_eq!(
            type_text(&TypeExpr::map(ident("string"), TypeExpr::selector("time", "Time"))),
            "map[string]time.Time"
        );
    }

    #[test]
    fn renders_channel_directions() {
        assert_eq!(type_text(&TypeExpr::chan(ChanDir::Both, ident("int"))), "chan int");
        assert_eq!(type_text(&TypeExpr::chan(ChanDir::Send, ident("int"))), "chan<- int");
        assert_eq!(type_text(&TypeExpr::chan(ChanDir::Recv, ident("int"))), "<-chan int");
    }

    #[test]
    fn renders_signature_without_parameter_names() {
        let expr = TypeExpr::Func {
            params: vec![
                Field::new(vec!["a".into(), "b".into()], ident("Point")),
                Field::new(vec!["rest".into()], TypeExpr::ellipsis(ident("string"))),
            ],
            results: vec![Field::unnamed(ident("error"))],
        };
        assert_eq!(type_text(&expr), "func(Point, ...string) (error)");

        let expr = TypeExpr::Func {
            params: Vec::new(),
            results: Vec::new(),
        };
        assert_eq!(type_text(&expr), "func()");
    }

    #[test]
    fn collapses_inline_literals() {
        assert_eq!(type_text(&TypeExpr::Struct(Vec::new())), "struct {}");
        assert_eq!(
            type_text(&TypeExpr::Interface(vec![Field::unnamed(ident("io.Reader"))])),
            "interface{}"
        );
    }
}
