pub mod dir;
pub mod format;
