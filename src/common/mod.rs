pub mod collect;
pub mod entry;
pub mod options;
pub mod sort;
pub mod source;
