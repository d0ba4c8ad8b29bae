use crate::common::entry::DirEntry;
use crate::common::options::ListOptions;
use crate::common::source::{MetadataSource, Target};
use crate::utils::format;

/// Entries to print together with the width of the size column.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pub entries: Vec<DirEntry>,
    /// Widest formatted size among `entries`, in digits.
    pub max_size_width: usize,
}

/// Why an entry was left out of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    Implied,
    Hidden,
    Backup,
}

/// Checks an entry against the visibility flags, in precedence order.
#[inline]
fn skip_reason(entry: &DirEntry, options: &ListOptions) -> Option<Skip> {
    if !options.all && entry.is_implied() {
        return Some(Skip::Implied);
    }
    if !options.all && !options.almost_all && entry.is_dotfile() {
        return Some(Skip::Hidden);
    }
    if options.ignore_backups && entry.is_backup() {
        return Some(Skip::Backup);
    }
    None
}

/// Reads the target through `source` and keeps the entries that should be shown.
pub fn collect(source: &impl MetadataSource, options: &ListOptions) -> anyhow::Result<Listing> {
    // A file named on the command line is always listed
    let (candidates, is_file_target) = match source.read(&options.path)? {
        Target::Directory(entries) => (entries, false),
        Target::File(entry) => (vec![entry], true),
    };

    let mut listing = Listing { entries: Vec::with_capacity(candidates.len()), max_size_width: 0 };
    let mut skipped = 0usize;

    for entry in candidates {
        if !is_file_target {
            if let Some(reason) = skip_reason(&entry, options) {
                log::trace!("skipping '{}' ({reason:?})", entry.name);
                skipped += 1;
                continue;
            }
        }

        let size = format::format_size(entry.size, options.block_size, options.kibibytes);
        log::trace!("keeping '{}' ({size}, uid {}, gid {})", entry.name, entry.uid, entry.gid);
        listing.max_size_width = listing.max_size_width.max(format::digit_width(size));
        listing.entries.push(entry);
    }

    log::debug!("collected {} entries, skipped {skipped}", listing.entries.len());
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::entry::tests::fake;
    use crate::utils::format::BlockSize;
    use std::path::{Path, PathBuf};

    /// Hands out a fixed set of entries whatever the path.
    struct FakeSource(Vec<DirEntry>);

    impl MetadataSource for FakeSource {
        fn read(&self, _path: &Path) -> anyhow::Result<Target> {
            Ok(Target::Directory(self.0.clone()))
        }
    }

    struct FakeFile(DirEntry);

    impl MetadataSource for FakeFile {
        fn read(&self, _path: &Path) -> anyhow::Result<Target> {
            Ok(Target::File(self.0.clone()))
        }
    }

    struct FailingSource;

    impl MetadataSource for FailingSource {
        fn read(&self, path: &Path) -> anyhow::Result<Target> {
            anyhow::bail!("cannot access '{}'", path.display())
        }
    }

    fn sample() -> FakeSource {
        FakeSource(vec![
            fake(".", true, 4096, 0),
            fake("..", true, 4096, 0),
            fake(".hidden", false, 10, 0),
            fake("visible", false, 10, 0),
            fake("backup~", false, 10, 0),
        ])
    }

    fn names(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn options() -> ListOptions {
        ListOptions { path: PathBuf::from("target"), ..Default::default() }
    }

    #[test]
    fn test_default_hides_dotfiles_and_backups() {
        let opts = ListOptions { ignore_backups: true, ..options() };
        let listing = collect(&sample(), &opts).unwrap();
        assert_eq!(names(&listing), vec!["visible"]);
    }

    #[test]
    fn test_default_keeps_backups() {
        let listing = collect(&sample(), &options()).unwrap();
        assert_eq!(names(&listing), vec!["visible", "backup~"]);
    }

    #[test]
    fn test_almost_all_hides_only_implied() {
        let opts = ListOptions { almost_all: true, ..options() };
        let listing = collect(&sample(), &opts).unwrap();
        assert_eq!(names(&listing), vec![".hidden", "visible", "backup~"]);
    }

    #[test]
    fn test_all_shows_everything() {
        let opts = ListOptions { all: true, ..options() };
        let listing = collect(&sample(), &opts).unwrap();
        assert_eq!(names(&listing), vec![".", "..", ".hidden", "visible", "backup~"]);
    }

    #[test]
    fn test_ignore_backups_applies_with_all() {
        let opts = ListOptions { all: true, ignore_backups: true, ..options() };
        let listing = collect(&sample(), &opts).unwrap();
        assert_eq!(names(&listing), vec![".", "..", ".hidden", "visible"]);
    }

    #[test]
    fn test_width_tracks_filtered_set_only() {
        let source = FakeSource(vec![
            fake(".", true, 4096, 0),
            fake(".big", false, 123_456_789, 0),
            fake("a", false, 7, 0),
            fake("b", false, 42, 0),
            fake("c", false, 512, 0),
        ]);

        let listing = collect(&source, &options()).unwrap();
        assert_eq!(names(&listing), vec!["a", "b", "c"]);
        assert_eq!(listing.max_size_width, 3);

        let opts = ListOptions { all: true, ..options() };
        let listing = collect(&source, &opts).unwrap();
        assert_eq!(listing.max_size_width, 9);
    }

    #[test]
    fn test_width_uses_scaled_size() {
        let source = FakeSource(vec![fake("a", false, 5 * 1024 * 1024, 0), fake("b", false, 1, 0)]);
        let opts = ListOptions { block_size: BlockSize::K, ..options() };

        let listing = collect(&source, &opts).unwrap();
        // 5120K
        assert_eq!(listing.max_size_width, 4);
    }

    #[test]
    fn test_empty_directory() {
        let source = FakeSource(vec![fake(".", true, 0, 0), fake("..", true, 0, 0)]);
        let listing = collect(&source, &options()).unwrap();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.max_size_width, 0);
    }

    #[test]
    fn test_file_target_is_always_listed() {
        let source = FakeFile(fake(".profile", false, 10, 0));
        let opts = ListOptions { ignore_backups: true, ..options() };
        let listing = collect(&source, &opts).unwrap();
        assert_eq!(names(&listing), vec![".profile"]);
    }

    #[test]
    fn test_source_error_propagates() {
        let err = collect(&FailingSource, &options()).unwrap_err();
        assert!(err.to_string().contains("cannot access"));
    }
}
