use crate::utils::dir;
use chrono::{DateTime, Local};
use std::fs::Metadata;

/// One listed filesystem object with everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    /// Permission bits (file type bits are ignored).
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub user: String,
    pub gid: u32,
    pub group: String,
    pub modified: DateTime<Local>,
}

impl DirEntry {
    /// Builds an entry from filesystem metadata, resolving owner and group names.
    pub fn from_metadata(name: impl Into<String>, metadata: &Metadata) -> Self {
        let modified = metadata
            .modified()
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| DateTime::<Local>::from(std::time::UNIX_EPOCH));

        #[cfg(unix)]
        let (mode, nlink, uid, gid) = {
            use std::os::unix::fs::MetadataExt;
            (metadata.mode(), metadata.nlink(), metadata.uid(), metadata.gid())
        };

        #[cfg(not(unix))]
        let (mode, nlink, uid, gid) =
            (if metadata.permissions().readonly() { 0o444 } else { 0o666 }, 1, 0, 0);

        Self {
            name: name.into(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            mode,
            nlink,
            uid,
            user: dir::user_name(uid),
            gid,
            group: dir::group_name(gid),
            modified,
        }
    }

    /// Seconds since the Unix epoch of the last modification.
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.modified.timestamp()
    }

    /// `.` and `..`, the entries every directory implicitly contains.
    #[inline]
    pub fn is_implied(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    #[inline]
    pub fn is_dotfile(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Editor backup files, e.g. `notes.txt~`.
    #[inline]
    pub fn is_backup(&self) -> bool {
        self.name.ends_with('~')
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::tempdir;

    /// In-memory entry used by the collector, sorter and renderer tests.
    pub fn fake(name: &str, is_dir: bool, size: u64, secs: i64) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir,
            size,
            mode: if is_dir { 0o755 } else { 0o644 },
            nlink: if is_dir { 2 } else { 1 },
            uid: 1000,
            user: "alice".to_string(),
            gid: 100,
            group: "users".to_string(),
            modified: Local.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_name_predicates() {
        assert!(fake(".", true, 0, 0).is_implied());
        assert!(fake("..", true, 0, 0).is_implied());
        assert!(!fake("...", true, 0, 0).is_implied());
        assert!(fake(".hidden", false, 0, 0).is_dotfile());
        assert!(fake("backup~", false, 0, 0).is_backup());
        assert!(!fake("visible", false, 0, 0).is_backup());
    }

    #[test]
    fn test_from_metadata() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();

        let entry = DirEntry::from_metadata("a.txt", &fs::metadata(&file).unwrap());
        assert_eq!(entry.name, "a.txt");
        assert!(!entry.is_dir);
        assert_eq!(entry.size, 5);
        assert_eq!(entry.nlink, 1);
        assert!(!entry.user.is_empty());
        assert!(!entry.group.is_empty());

        let entry = DirEntry::from_metadata("tmp", &fs::metadata(dir.path()).unwrap());
        assert!(entry.is_dir);
    }
}
