//! Error kinds for goerd operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument or option
    InvalidArgument,

    // =========================================================================
    // Parse errors
    // =========================================================================
    /// The parser produced no tree at all
    ParseFailed,

    /// Invalid syntax in a source file
    SyntaxError,

    /// Tree-sitter grammar could not be loaded
    GrammarError,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File or directory not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    /// Directory traversal failed
    TraversalFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
