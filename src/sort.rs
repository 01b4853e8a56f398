//! Path ordering
//!
//! Three total orders over collected paths. Every comparator breaks
//! ties all the way down to the full byte-wise path, so no two distinct
//! paths compare equal and the final order is deterministic.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::config::SortMode;
use crate::meta::file_size;

/// Case-insensitive basename order, full byte-wise path as tie-break.
pub fn compare_by_name(a: &Path, b: &Path) -> Ordering {
    basename(a)
        .to_ascii_lowercase()
        .cmp(&basename(b).to_ascii_lowercase())
        .then_with(|| compare_by_path(a, b))
}

/// Byte-wise order over the entire path, case sensitive.
pub fn compare_by_path(a: &Path, b: &Path) -> Ordering {
    a.as_os_str().cmp(b.as_os_str())
}

/// Largest file first; equal sizes fall back to name order.
pub fn compare_by_size(a: &Path, a_size: u64, b: &Path, b_size: u64) -> Ordering {
    b_size.cmp(&a_size).then_with(|| compare_by_name(a, b))
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Reorder `paths` in place according to `mode`.
///
/// The reorder is a pure permutation: the same multiset of paths comes
/// out, only the order changes. By-size probes each path's size once
/// at sort time.
pub fn sort_paths(paths: &mut Vec<PathBuf>, mode: SortMode) {
    match mode {
        SortMode::ByName => paths.sort_by(|a, b| compare_by_name(a, b)),
        SortMode::ByFullPath => paths.sort_by(|a, b| compare_by_path(a, b)),
        SortMode::BySize => {
            let mut sized: Vec<(u64, PathBuf)> =
                paths.drain(..).map(|p| (file_size(&p), p)).collect();
            sized.sort_by(|(sa, a), (sb, b)| compare_by_size(a, *sa, b, *sb));
            paths.extend(sized.into_iter().map(|(_, p)| p));
        }
    }
}
