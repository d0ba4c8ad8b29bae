//! Read-only access to filesystem metadata.
//!
//! Everything above this module works on [`DirEntry`] values only, so the
//! collector, sorter and renderer can be exercised without touching the disk.

use crate::common::entry::DirEntry;
use crate::utils::dir;
use anyhow::Context;
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

/// What a listing target turned out to be.
#[derive(Debug, Clone)]
pub enum Target {
    /// `.`, `..` and every direct child, in directory order.
    Directory(Vec<DirEntry>),
    /// Anything that is not a directory is listed as itself.
    File(DirEntry),
}

/// Yields the entries to consider for a listing of `path`.
pub trait MetadataSource {
    fn read(&self, path: &Path) -> anyhow::Result<Target>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl MetadataSource for FsSource {
    fn read(&self, path: &Path) -> anyhow::Result<Target> {
        let metadata =
            fs::metadata(path).with_context(|| format!("cannot access '{}'", path.display()))?;

        if !metadata.is_dir() {
            return Ok(Target::File(DirEntry::from_metadata(dir::display_name(path), &metadata)));
        }

        let mut entries = Vec::new();
        entries.push(DirEntry::from_metadata(".", &metadata));
        let parent = fs::metadata(path.join("..")).unwrap_or_else(|_| metadata.clone());
        entries.push(DirEntry::from_metadata("..", &parent));

        // Only immediate children, nothing hidden or ignored by default
        let mut builder = WalkBuilder::new(path);
        builder.standard_filters(false).max_depth(Some(1)).follow_links(false);

        for result in builder.build() {
            let entry =
                result.with_context(|| format!("cannot open directory '{}'", path.display()))?;
            if entry.depth() == 0 {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.metadata() {
                Ok(md) => entries.push(DirEntry::from_metadata(name, &md)),
                Err(err) => log::warn!("skipping '{}': {err}", entry.path().display()),
            }
        }

        log::debug!("read {} entries from '{}'", entries.len(), path.display());
        Ok(Target::Directory(entries))
    }
}
