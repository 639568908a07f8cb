pub mod bookmarks;
pub mod jobs;
pub mod theme;
