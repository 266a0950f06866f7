//! Node statements: one per declaration, labelled by shape.

use std::fmt::Write;

use goerd_core::{DeclShape, Declaration, Field, type_text};

use crate::dot::{NodeShape, escape_label};

/// Escaped label for `decl`, or `None` when its shape has no node form.
pub fn node_label(decl: &Declaration, buf: &mut String) -> Option<NodeShape> {
    let shape = NodeShape::for_decl(&decl.shape)?;
    buf.clear();
    match &decl.shape {
        DeclShape::Interface(methods) => {
            write_record(buf, &format!("{} interface", decl.name), methods);
        }
        DeclShape::Struct(fields) => write_record(buf, &decl.name, fields),
        other => {
            let sep = if decl.alias { " = " } else { " " };
            buf.push_str(&escape_label(&format!(
                "{}{sep}{}",
                decl.name,
                other.type_text()
            )));
        }
    }
    Some(shape)
}

/// `{header|<f0>first|<f1>second}`; compartment `i` is addressable as port `f<i>`.
fn write_record(buf: &mut String, header: &str, members: &[Field]) {
    buf.push('{');
    buf.push_str(&escape_label(header));
    buf.push('|');
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            buf.push('|');
        }
        let _ = write!(buf, "<f{i}>{}", escape_label(&compartment_text(member)));
    }
    buf.push('}');
}

/// `X, Y int` for a field group, `Read func([]byte) (int, error)` for a method.
pub fn compartment_text(member: &Field) -> String {
    let ty = type_text(&member.ty);
    if member.is_embedded() {
        ty
    } else {
        format!("{} {}", member.names.join(", "), ty)
    }
}
