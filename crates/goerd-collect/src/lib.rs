//! Declaration collection.
//!
//! Turns a set of Go package directories into a [`Registry`]: package name to
//! declaration name to [`Declaration`](goerd_core::Declaration).
//!
//! # Module Structure
//!
//! - [`registry`]: the registry type and its merge rules
//! - [`discovery`]: Go file discovery inside one directory
//! - [`module`]: `go.mod` lookup and import path to directory mapping
//! - [`collect`]: the collector driving parsing, the merge set and the visit set

mod collect;
mod discovery;
mod module;
mod registry;

pub use collect::{CollectOptions, CollectReport, Collector, collect_paths};
pub use discovery::go_files;
pub use module::GoModule;
pub use registry::{PackageTypes, Registry};
