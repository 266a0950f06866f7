//! # goerd-error
//!
//! Unified error handling for goerd.
//!
//! - **ErrorKind**: what went wrong (e.g. `SyntaxError`, `FileNotFound`)
//! - **Error context**: the failing operation plus key/value pairs locating the cause
//! - **Error source**: the wrapped underlying error, if any
//!
//! ```rust
//! use goerd_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::SyntaxError, "unexpected token")
//!         .with_operation("syntax::parse_source")
//!         .with_context("file", "pkg/model.go")
//!         .with_context("line", "42"))
//! }
//! ```
//!
//! Every fallible function returns `Result<T, goerd_error::Error>`. External errors are
//! wrapped with `set_source(err)`; callers further up only append context.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using goerd Error
pub type Result<T> = std::result::Result<T, Error>;
