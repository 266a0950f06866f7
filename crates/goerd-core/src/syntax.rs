//! Go front-end: tree-sitter parsing and lowering of grammar nodes into [`TypeExpr`].

use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

use goerd_error::{Error, ErrorKind, Result};

use crate::ast::{ChanDir, Field, TypeExpr};
use crate::decl::Declaration;
use crate::file::SourceFile;

/// A parsed Go file with its package clause and import paths pulled out.
pub struct ParsedFile {
    pub file: SourceFile,
    pub tree: Tree,
    pub package: Option<String>,
    pub imports: Vec<String>,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|err| {
                Error::new(ErrorKind::GrammarError, err.to_string())
                    .with_operation("syntax::GoParser::new")
                    .set_source(err)
            })?;
        Ok(Self { parser })
    }

    /// Parse `file`. Any syntax error in the tree fails the whole file.
    pub fn parse(&mut self, file: &SourceFile) -> Result<ParsedFile> {
        let tree = self.parser.parse(file.content(), None).ok_or_else(|| {
            Error::parse_failed("parser returned no tree")
                .with_operation("syntax::parse")
                .with_context("file", file.display_path())
        })?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root);
            let pos = at.start_position();
            return Err(Error::syntax_error(format!(
                "unexpected {} near `{}`",
                if at.is_missing() { "end of input" } else { "syntax" },
                snippet(&file.text(at))
            ))
            .with_operation("syntax::parse")
            .with_context("file", file.display_path())
            .with_context("line", (pos.row + 1).to_string())
            .with_context("column", (pos.column + 1).to_string()));
        }

        let package = package_name(root, file);
        let imports = import_paths(root, file);
        debug!(
            file = %file.display_path(),
            package = package.as_deref().unwrap_or("?"),
            imports = imports.len(),
            "parsed"
        );
        Ok(ParsedFile {
            file: file.clone(),
            tree,
            package,
            imports,
        })
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn snippet(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    line.chars().take(40).collect()
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn package_name(root: Node<'_>, file: &SourceFile) -> Option<String> {
    named_children(root)
        .into_iter()
        .find(|node| node.kind() == "package_clause")
        .and_then(|clause| {
            named_children(clause)
                .into_iter()
                .find(|node| node.kind() == "package_identifier")
        })
        .map(|ident| file.text(ident))
}

fn import_paths(root: Node<'_>, file: &SourceFile) -> Vec<String> {
    let mut paths = Vec::new();
    for decl in named_children(root) {
        if decl.kind() != "import_declaration" {
            continue;
        }
        let mut specs = Vec::new();
        for child in named_children(decl) {
            match child.kind() {
                "import_spec" => specs.push(child),
                "import_spec_list" => specs.extend(
                    named_children(child)
                        .into_iter()
                        .filter(|spec| spec.kind() == "import_spec"),
                ),
                _ => {}
            }
        }
        for spec in specs {
            if let Some(path) = spec.child_by_field_name("path") {
                let text = file.text(path);
                paths.push(text.trim_matches(|c| c == '"' || c == '`').to_string());
            }
        }
    }
    paths
}

/// Lower a `type_spec` (`type A B`) or `type_alias` (`type A = B`) node.
pub fn lower_type_spec(node: Node<'_>, file: &SourceFile) -> Option<Declaration> {
    let alias = match node.kind() {
        "type_spec" => false,
        "type_alias" => true,
        _ => return None,
    };
    let name = node.child_by_field_name("name")?;
    let ty = field_type(node, "type", file);
    let mut decl = Declaration::new(file.text(name), ty).with_alias(alias);
    if let Some(path) = &file.path {
        decl = decl.with_file(path.clone());
    }
    Some(decl)
}

/// Lower a type node into the abstract model.
pub fn lower_type(node: Node<'_>, file: &SourceFile) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Ident(file.text(node)),
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(pkg), Some(name)) => TypeExpr::selector(file.text(pkg), file.text(name)),
                _ => opaque(node, file),
            }
        }
        "pointer_type" => match named_children(node).first() {
            Some(inner) => TypeExpr::pointer(lower_type(*inner, file)),
            None => opaque(node, file),
        },
        "parenthesized_type" => match named_children(node).first() {
            Some(inner) => lower_type(*inner, file),
            None => opaque(node, file),
        },
        "slice_type" => TypeExpr::slice(field_type(node, "element", file)),
        "array_type" => TypeExpr::Array {
            len: node.child_by_field_name("length").map(|len| file.text(len)),
            elem: Box::new(field_type(node, "element", file)),
        },
        "implicit_length_array_type" => TypeExpr::Array {
            len: Some("...".to_string()),
            elem: Box::new(field_type(node, "element", file)),
        },
        "map_type" => TypeExpr::map(field_type(node, "key", file), field_type(node, "value", file)),
        "channel_type" => TypeExpr::chan(chan_dir(node), field_type(node, "value", file)),
        "function_type" => lower_signature(node, file),
        "struct_type" => TypeExpr::Struct(lower_struct_fields(node, file)),
        "interface_type" => TypeExpr::Interface(lower_interface_members(node, file)),
        _ => opaque(node, file),
    }
}

fn opaque(node: Node<'_>, file: &SourceFile) -> TypeExpr {
    TypeExpr::Opaque {
        kind: node.kind().to_string(),
        text: file.text(node),
    }
}

fn field_type(node: Node<'_>, field: &str, file: &SourceFile) -> TypeExpr {
    match node.child_by_field_name(field) {
        Some(child) => lower_type(child, file),
        None => TypeExpr::Opaque {
            kind: format!("missing {field}"),
            text: file.text(node),
        },
    }
}

fn chan_dir(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|child| !child.is_named())
        .map(|child| child.kind())
        .collect();
    match tokens.as_slice() {
        ["<-", ..] => ChanDir::Recv,
        tokens if tokens.contains(&"<-") => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

/// Lower anything carrying `parameters` / `result` fields into a `Func`.
fn lower_signature(node: Node<'_>, file: &SourceFile) -> TypeExpr {
    let params = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameters(list, file))
        .unwrap_or_default();
    let results = match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => lower_parameters(result, file),
        Some(result) => vec![Field::unnamed(lower_type(result, file))],
        None => Vec::new(),
    };
    TypeExpr::Func { params, results }
}

fn field_names(node: Node<'_>, file: &SourceFile) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|name| file.text(name))
        .collect()
}

fn lower_parameters(list: Node<'_>, file: &SourceFile) -> Vec<Field> {
    named_children(list)
        .into_iter()
        .filter_map(|param| match param.kind() {
            "parameter_declaration" => Some(Field::new(
                field_names(param, file),
                field_type(param, "type", file),
            )),
            "variadic_parameter_declaration" => Some(Field::new(
                field_names(param, file),
                TypeExpr::ellipsis(field_type(param, "type", file)),
            )),
            _ => None,
        })
        .collect()
}

fn lower_struct_fields(node: Node<'_>, file: &SourceFile) -> Vec<Field> {
    let Some(list) = named_children(node)
        .into_iter()
        .find(|child| child.kind() == "field_declaration_list")
    else {
        return Vec::new();
    };

    named_children(list)
        .into_iter()
        .filter(|decl| decl.kind() == "field_declaration")
        .map(|decl| {
            let names = field_names(decl, file);
            let mut ty = field_type(decl, "type", file);
            if names.is_empty() && has_token(decl, "*") {
                ty = TypeExpr::pointer(ty);
            }
            Field::new(names, ty)
        })
        .collect()
}

fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token)
}

fn lower_interface_members(node: Node<'_>, file: &SourceFile) -> Vec<Field> {
    named_children(node)
        .into_iter()
        .map(|member| match member.kind() {
            // `method_spec` in grammars predating generics
            "method_elem" | "method_spec" => {
                let names = field_names(member, file);
                Field::new(names, lower_signature(member, file))
            }
            "type_elem" | "constraint_elem" => match named_children(member).as_slice() {
                [single] => Field::unnamed(lower_type(*single, file)),
                _ => Field::unnamed(opaque(member, file)),
            },
            _ => Field::unnamed(lower_type(member, file)),
        })
        .collect()
}
