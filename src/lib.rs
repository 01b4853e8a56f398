//! Ferret - find files in a directory tree by name, owner, permissions, and depth

pub mod config;
pub mod error;
pub mod filter;
pub mod meta;
pub mod sort;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{SearchConfig, SortMode, Terminator};
pub use error::FerretError;
pub use filter::matches;
pub use meta::{EntryMetadata, FileKind, pack_mode, probe};
pub use sort::sort_paths;
pub use walk::Walker;
