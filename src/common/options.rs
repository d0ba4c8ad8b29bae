use crate::common::sort::SortType;
use crate::utils::format::BlockSize;
use std::path::PathBuf;

/// Resolved configuration for one listing run.
///
/// Built once from the command line (and config file) and only read afterwards.
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub path: PathBuf,
    pub all: bool,
    pub almost_all: bool,
    pub author: bool,
    /// Accepted for compatibility, names are always printed as-is.
    pub escape: bool,
    pub ignore_backups: bool,
    pub long_format: bool,
    pub sort: SortType,
    pub block_size: BlockSize,
    pub kibibytes: bool,
    pub colorize: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            all: false,
            almost_all: false,
            author: false,
            escape: false,
            ignore_backups: false,
            long_format: false,
            sort: SortType::default(),
            block_size: BlockSize::default(),
            kibibytes: false,
            colorize: false,
        }
    }
}
