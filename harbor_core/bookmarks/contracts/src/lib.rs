use std::future::Future;

use harbor_models::{
    bookmark::BookmarkSnapshot,
    job::{JobId, JobPosting},
};
use tokio::sync::watch;

/// The single owner of the user's bookmarked postings.
///
/// Mutations update the in-memory set and all observers immediately; the
/// full set is then persisted in the background. Persisted writes are applied
/// in the order the mutations were made.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BookmarkService: Send + Sync + 'static {
    /// Whether a posting with this id is bookmarked. Always `false` while the
    /// persisted bookmarks are still loading.
    fn is_bookmarked(&self, id: &JobId) -> bool;

    /// Bookmarks a copy of `job`. Does nothing if its id is already
    /// bookmarked.
    ///
    /// Mutations made while loading are applied once loading has finished.
    fn add_bookmark(&self, job: JobPosting);

    /// Removes the bookmark with the given id, if any.
    fn remove_bookmark(&self, id: &JobId);

    /// Returns the current read model.
    fn snapshot(&self) -> BookmarkSnapshot;

    /// Subscribes to changes of the read model.
    fn subscribe(&self) -> watch::Receiver<BookmarkSnapshot>;

    /// Resolves once the persisted bookmarks have been loaded.
    fn wait_ready(&self) -> impl Future<Output = ()> + Send;

    /// Resolves once every mutation made before this call has been written
    /// to (or failed to be written to) durable storage.
    fn flush(&self) -> impl Future<Output = ()> + Send;
}

#[cfg(feature = "mock")]
impl MockBookmarkService {
    pub fn with_is_bookmarked(mut self, id: JobId, result: bool) -> Self {
        self.expect_is_bookmarked()
            .once()
            .with(mockall::predicate::eq(id))
            .return_const(result);
        self
    }

    pub fn with_add_bookmark(mut self, job: JobPosting) -> Self {
        self.expect_add_bookmark()
            .once()
            .with(mockall::predicate::eq(job))
            .return_const(());
        self
    }

    pub fn with_remove_bookmark(mut self, id: JobId) -> Self {
        self.expect_remove_bookmark()
            .once()
            .with(mockall::predicate::eq(id))
            .return_const(());
        self
    }

    pub fn with_snapshot(mut self, snapshot: BookmarkSnapshot) -> Self {
        self.expect_snapshot().once().return_const(snapshot);
        self
    }

    pub fn with_wait_ready(mut self) -> Self {
        self.expect_wait_ready()
            .once()
            .returning(|| Box::pin(std::future::ready(())));
        self
    }

    pub fn with_flush(mut self) -> Self {
        self.expect_flush()
            .once()
            .returning(|| Box::pin(std::future::ready(())));
        self
    }
}
