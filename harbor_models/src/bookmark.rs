use crate::job::JobPosting;

/// Read model of the bookmark store as seen by observers.
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkSnapshot {
    /// Bookmarked postings in the order they were added.
    pub bookmarks: Vec<JobPosting>,
    /// `true` until the persisted bookmarks have been loaded.
    pub loading: bool,
}

impl BookmarkSnapshot {
    pub fn loading() -> Self {
        Self {
            bookmarks: Vec::new(),
            loading: true,
        }
    }
}
