pub mod ast;
pub mod decl;
pub mod file;
pub mod resolve;
pub mod syntax;
pub mod text;
pub mod visit;

pub use ast::{ChanDir, Field, TypeExpr};
pub use decl::{DeclShape, Declaration};
pub use file::SourceFile;
pub use goerd_error::{Error, ErrorKind, Result};
pub use resolve::{dedup, resolve};
pub use syntax::{GoParser, ParsedFile};
pub use text::type_text;
pub use tree_sitter::{Node, Tree, TreeCursor};
pub use visit::{Descend, SyntaxVisitor, walk};
