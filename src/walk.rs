//! Directory tree traversal
//!
//! Walks the tree depth-first over an explicit work stack, probing and
//! filtering every entry and collecting the paths of matching files.
//! The stack keeps arbitrarily deep trees from exhausting the call
//! stack.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SearchConfig;
use crate::error::FerretError;
use crate::filter::matches;
use crate::meta::{self, FileKind};

/// Recursive directory walker that collects matching file paths.
pub struct Walker {
    config: SearchConfig,
}

impl Walker {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Collect every matching file underneath `root`.
    ///
    /// A subdirectory that cannot be opened is reported on stderr and
    /// skipped; only a failure to open `root` itself aborts the walk.
    /// Depth bounds in the configuration decide which files are
    /// collected, not how deep the walk descends.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>, FerretError> {
        let mut results = Vec::new();
        let mut stack: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

        while let Some((dir, depth)) = stack.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(source) if depth == 0 => {
                    return Err(FerretError::RootNotOpenable { path: dir, source });
                }
                Err(_) => {
                    eprintln!("ferret: {}: Permission denied", dir.display());
                    continue;
                }
            };

            let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
            entries.sort_by_key(|e| e.file_name());

            for entry in entries {
                let name = entry.file_name().to_string_lossy().to_string();

                if !self.config.include_hidden && name.starts_with('.') {
                    continue;
                }

                let path = dir.join(entry.file_name());
                let entry_meta = match meta::probe(&path) {
                    Ok(m) => m,
                    Err(_) => {
                        eprintln!("ferret: {}: Couldn't read file info!", path.display());
                        continue;
                    }
                };

                if entry_meta.kind == FileKind::Directory {
                    // Entries inside this subdirectory sit one level deeper
                    stack.push((path, depth + 1));
                } else if matches(&entry_meta, &name, depth, &self.config) {
                    results.push(path);
                }
            }
        }

        Ok(results)
    }
}
