//! Depth-first traversal over tree-sitter syntax trees.
//!
//! A [`SyntaxVisitor`] sees every node in pre-order and decides per node whether the
//! walk descends into it. Returning [`Descend::Skip`] prunes the subtree, which is how
//! the collector ignores comments and keeps type declarations opaque.
//!
//! ```ignore
//! struct TypeNames(Vec<String>);
//!
//! impl<'t> SyntaxVisitor<'t> for TypeNames {
//!     fn visit(&mut self, node: Node<'t>) -> Descend {
//!         if node.kind() == "type_spec" {
//!             self.0.push(node.kind().to_string());
//!             return Descend::Skip;
//!         }
//!         Descend::Children
//!     }
//! }
//! ```

use tree_sitter::Node;

/// Whether the walk continues into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Children,
    Skip,
}

pub trait SyntaxVisitor<'t> {
    fn visit(&mut self, node: Node<'t>) -> Descend;
}

/// Walk the subtree rooted at `root` in pre-order.
///
/// Uses a single cursor, so deep trees do not grow the call stack.
pub fn walk<'t, V>(root: Node<'t>, visitor: &mut V)
where
    V: SyntaxVisitor<'t> + ?Sized,
{
    let mut cursor = root.walk();
    loop {
        let descend = visitor.visit(cursor.node());
        if descend == Descend::Children && cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
