//! Dependency resolution: reduce a type expression to the names it references.

use std::collections::HashSet;

use crate::ast::{Field, TypeExpr};

/// Collect the type names `expr` structurally depends on, in declaration order.
///
/// Wrappers (pointer, variadic, array, map, channel) are stripped down to their
/// identifiers; qualified names keep their `pkg.` prefix. Opaque constructs yield a
/// single `<kind>` placeholder, which never matches a declared Go name.
pub fn resolve(expr: &TypeExpr) -> Vec<String> {
    let mut out = Vec::new();
    resolve_into(expr, &mut out);
    out
}

/// Resolve a field, ignoring its names.
pub fn resolve_field(field: &Field) -> Vec<String> {
    resolve(&field.ty)
}

fn resolve_into(expr: &TypeExpr, out: &mut Vec<String>) {
    match expr {
        TypeExpr::Ident(name) => out.push(name.clone()),
        TypeExpr::Selector { pkg, name } => out.push(format!("{pkg}.{name}")),
        TypeExpr::Pointer(inner) | TypeExpr::Ellipsis(inner) => resolve_into(inner, out),
        TypeExpr::Array { elem, .. } => resolve_into(elem, out),
        TypeExpr::Map { key, value } => {
            resolve_into(key, out);
            resolve_into(value, out);
        }
        TypeExpr::Chan { elem, .. } => resolve_into(elem, out),
        TypeExpr::Func { params, results } => {
            for field in params.iter().chain(results) {
                resolve_into(&field.ty, out);
            }
        }
        TypeExpr::Struct(fields) | TypeExpr::Interface(fields) => {
            for field in fields {
                resolve_into(&field.ty, out);
            }
        }
        TypeExpr::Opaque { kind, .. } => out.push(format!("<{kind}>")),
    }
}

/// Drop repeated names, keeping the first occurrence of each.
pub fn dedup(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ChanDir;

    fn ident(name: &str) -> TypeExpr {
        TypeExpr::ident(name)
    }

    #[test]
    fn wrappers_reduce_to_identifiers() {
        let expr = TypeExpr::pointer(TypeExpr::slice(TypeExpr::ellipsis(ident("Point"))));
        assert_eq!(resolve(&expr), vec!["Point"]);

        let expr = TypeExpr::chan(ChanDir::Recv, TypeExpr::pointer(ident("Event")));
        assert_eq!(resolve(&expr), vec!["Event"]);
    }

    #[test]
    fn selector_keeps_package_prefix() {
        assert_eq!(resolve(&TypeExpr::selector("http", "Request")), vec!["http.Request"]);
    }

    #[test]
    fn map_lists_key_before_value() {
        let expr = TypeExpr::map(ident("Key"), TypeExpr::slice(ident("Value")));
        assert_eq!(resolve(&expr), vec!["Key", "Value"]);
    }

    #[test]
    fn func_lists_params_then_results() {
        let expr = TypeExpr::Func {
            params: vec![
                Field::new(vec!["ctx".into()], TypeExpr::selector("context", "Context")),
                Field::new(vec!["p".into()], TypeExpr::pointer(ident("Point"))),
            ],
            results: vec![Field::unnamed(ident("Result")), Field::unnamed(ident("error"))],
        };
        assert_eq!(
            resolve(&expr),
            vec!["context.Context", "Point", "Result", "error"]
        );
    }

    #[test]
    fn inline_struct_and_interface_concatenate_members() {
        let expr = TypeExpr::Struct(vec![
            Field::new(vec!["A".into()], ident("Alpha")),
            Field::unnamed(ident("Beta")),
        ]);
        assert_eq!(resolve(&expr), vec!["Alpha", "Beta"]);

        let expr = TypeExpr::Interface(vec![Field::new(
            vec!["Do".into()],
            TypeExpr::Func {
                params: vec![Field::unnamed(ident("Job"))],
                results: Vec::new(),
            },
        )]);
        assert_eq!(resolve(&expr), vec!["Job"]);
        assert!(resolve(&TypeExpr::Interface(Vec::new())).is_empty());
    }

    #[test]
    fn opaque_yields_placeholder() {
        let expr = TypeExpr::Opaque {
            kind: "generic_type".into(),
            text: "List[T]".into(),
        };
        let names = resolve(&expr);
        assert_eq!(names, vec!["<generic_type>"]);
        assert!(!names[0].is_empty());
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let names = vec!["B".to_string(), "A".into(), "B".into(), "C".into(), "A".into()];
        assert_eq!(dedup(names), vec!["B", "A", "C"]);
    }
}
