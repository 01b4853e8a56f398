//! Per-entry match predicate
//!
//! Combines an entry's metadata, its bare name, and its depth with the
//! search configuration into a single keep-or-drop verdict. The
//! predicate is pure: the walker owns the path and decides what to do
//! with it based on the returned boolean.

use std::ffi::OsStr;

use uzers::get_user_by_uid;

use crate::config::SearchConfig;
use crate::meta::{EntryMetadata, FileKind};

/// Decide whether a directory entry belongs in the result set.
///
/// Checks run in order and short-circuit on the first failure:
/// file type, name substring, depth bounds, owner, permission mask.
pub fn matches(
    meta: &EntryMetadata,
    entry_name: &str,
    depth: usize,
    config: &SearchConfig,
) -> bool {
    // Only regular files are ever reported
    if meta.kind != FileKind::Regular {
        return false;
    }

    if !entry_name.contains(&config.name_filter) {
        return false;
    }

    if depth < config.min_depth || depth >= config.max_depth {
        return false;
    }

    if let Some(ref owner) = config.owner {
        // A uid with no user-database entry matches nobody
        match get_user_by_uid(meta.uid) {
            Some(user) if user.name() == OsStr::new(owner) => {}
            _ => return false,
        }
    }

    if let Some(mask) = config.mask {
        if meta.permissions != mask {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use uzers::{get_current_uid, get_user_by_uid};

    fn file_meta() -> EntryMetadata {
        EntryMetadata {
            kind: FileKind::Regular,
            permissions: 644,
            uid: get_current_uid(),
            size: 10,
        }
    }

    #[test]
    fn test_rejects_non_regular_entries() {
        let mut meta = file_meta();
        let config = SearchConfig::default();

        meta.kind = FileKind::Directory;
        assert!(!matches(&meta, "dir", 0, &config));

        meta.kind = FileKind::Other;
        assert!(!matches(&meta, "link", 0, &config));
    }

    #[test]
    fn test_empty_name_filter_matches_all() {
        let config = SearchConfig::default();
        assert!(matches(&file_meta(), "anything.txt", 0, &config));
        assert!(matches(&file_meta(), "", 0, &config));
    }

    #[test]
    fn test_name_filter_is_substring_match() {
        let config = SearchConfig {
            name_filter: "log".to_string(),
            ..Default::default()
        };
        assert!(matches(&file_meta(), "syslog.txt", 0, &config));
        assert!(matches(&file_meta(), "log", 0, &config));
        assert!(!matches(&file_meta(), "sys.txt", 0, &config));
        // Matches the bare name only, case sensitively
        assert!(!matches(&file_meta(), "LOG.txt", 0, &config));
    }

    #[test]
    fn test_depth_bounds() {
        let config = SearchConfig {
            min_depth: 1,
            max_depth: 3,
            ..Default::default()
        };
        assert!(!matches(&file_meta(), "f", 0, &config));
        assert!(matches(&file_meta(), "f", 1, &config));
        assert!(matches(&file_meta(), "f", 2, &config));
        // max_depth is exclusive
        assert!(!matches(&file_meta(), "f", 3, &config));
    }

    #[test]
    fn test_permission_mask_must_match_exactly() {
        let config = SearchConfig {
            mask: Some(644),
            ..Default::default()
        };
        assert!(matches(&file_meta(), "f", 0, &config));

        let config = SearchConfig {
            mask: Some(600),
            ..Default::default()
        };
        assert!(!matches(&file_meta(), "f", 0, &config));
    }

    #[test]
    fn test_owner_filter_matches_current_user() {
        let name = get_user_by_uid(get_current_uid())
            .expect("current uid should resolve")
            .name()
            .to_string_lossy()
            .into_owned();

        let config = SearchConfig {
            owner: Some(name),
            ..Default::default()
        };
        assert!(matches(&file_meta(), "f", 0, &config));

        let config = SearchConfig {
            owner: Some("no-such-user-filter".to_string()),
            ..Default::default()
        };
        assert!(!matches(&file_meta(), "f", 0, &config));
    }

    #[test]
    fn test_unresolvable_uid_is_a_non_match() {
        let meta = EntryMetadata {
            uid: u32::MAX - 1,
            ..file_meta()
        };
        let config = SearchConfig {
            owner: Some("root".to_string()),
            ..Default::default()
        };
        assert!(!matches(&meta, "f", 0, &config));
    }
}
