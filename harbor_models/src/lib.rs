pub mod bookmark;
pub mod format;
pub mod job;
pub mod pagination;
pub mod search;
pub mod theme;
