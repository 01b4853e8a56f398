//! Metadata probing for directory entries
//!
//! Wraps lstat so the walker and filter see a file's type, packed
//! permissions, owner, and size without ever following symlinks.

use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Coarse file-type tag derived from the mode bits.
///
/// Symlinks land in `Other`: the probe never dereferences them, so a
/// link to a regular file is still not a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Other,
}

/// Snapshot of the lstat fields the search pipeline consumes.
#[derive(Debug, Clone, Copy)]
pub struct EntryMetadata {
    pub kind: FileKind,
    /// Permission bits packed as a base-10 integer, see [`pack_mode`].
    pub permissions: u32,
    /// Owning user id.
    pub uid: u32,
    /// Size in bytes.
    pub size: u64,
}

/// Probe a path without following symlinks.
pub fn probe(path: &Path) -> io::Result<EntryMetadata> {
    let meta = fs::symlink_metadata(path)?;
    let file_type = meta.file_type();
    let kind = if file_type.is_file() {
        FileKind::Regular
    } else if file_type.is_dir() {
        FileKind::Directory
    } else {
        FileKind::Other
    };

    Ok(EntryMetadata {
        kind,
        permissions: pack_mode(meta.mode()),
        uid: meta.uid(),
        size: meta.len(),
    })
}

/// Pack the nine POSIX permission bits into a base-10 integer.
///
/// Each octal digit of the mode becomes a decimal digit of the result,
/// so mode `0o754` packs to the integer 754. The encoding lets a
/// permission filter be given as a plain decimal number on the command
/// line.
pub fn pack_mode(mode: u32) -> u32 {
    let mut packed = 0;
    if mode & 0o400 != 0 {
        packed += 400;
    }
    if mode & 0o200 != 0 {
        packed += 200;
    }
    if mode & 0o100 != 0 {
        packed += 100;
    }
    if mode & 0o040 != 0 {
        packed += 40;
    }
    if mode & 0o020 != 0 {
        packed += 20;
    }
    if mode & 0o010 != 0 {
        packed += 10;
    }
    if mode & 0o004 != 0 {
        packed += 4;
    }
    if mode & 0o002 != 0 {
        packed += 2;
    }
    if mode & 0o001 != 0 {
        packed += 1;
    }
    packed
}

/// Size of the file at `path`, or 0 when it cannot be probed.
///
/// The by-size comparator calls this at sort time rather than reusing
/// walk-time metadata.
pub fn file_size(path: &Path) -> u64 {
    fs::symlink_metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::{PermissionsExt, symlink};
    use tempfile::TempDir;

    #[test]
    fn test_pack_mode() {
        assert_eq!(pack_mode(0o754), 754);
        assert_eq!(pack_mode(0o777), 777);
        assert_eq!(pack_mode(0o644), 644);
        assert_eq!(pack_mode(0o000), 0);
        assert_eq!(pack_mode(0o111), 111);
        // Non-permission mode bits do not leak into the packed value
        assert_eq!(pack_mode(0o100644), 644);
    }

    #[test]
    fn test_probe_regular_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "hello").unwrap();

        let meta = probe(&path).unwrap();
        assert_eq!(meta.kind, FileKind::Regular);
        assert_eq!(meta.size, 5);
    }

    #[test]
    fn test_probe_directory() {
        let dir = TempDir::new().unwrap();
        let meta = probe(dir.path()).unwrap();
        assert_eq!(meta.kind, FileKind::Directory);
    }

    #[test]
    fn test_probe_packs_permissions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "x").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o754)).unwrap();

        let meta = probe(&path).unwrap();
        assert_eq!(meta.permissions, 754);
    }

    #[test]
    fn test_probe_symlink_is_not_regular() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.txt");
        File::create(&target).unwrap();
        let link = dir.path().join("link.txt");
        symlink(&target, &link).unwrap();

        let meta = probe(&link).unwrap();
        assert_eq!(meta.kind, FileKind::Other);
    }

    #[test]
    fn test_probe_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        assert!(probe(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_file_size_missing_path_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(file_size(&dir.path().join("missing")), 0);
    }
}
