//! Ordering of collected entries.

use crate::common::entry::DirEntry;
use std::cmp::Ordering;

/// Defines the available sorting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortType {
    /// Keep the order reported by the filesystem.
    #[default]
    Directory,
    /// Newest modification first.
    Modified,
}

/// Sorts entries in place.
///
/// The sort is stable: entries that compare equal keep their collection order.
pub fn sort_entries(entries: &mut [DirEntry], sort_type: SortType) {
    if entries.len() <= 1 {
        return;
    }

    match sort_type {
        SortType::Directory => {}
        SortType::Modified => entries.sort_by(compare_by_time),
    }
}

#[inline]
fn compare_by_time(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.timestamp().cmp(&a.timestamp())
}
