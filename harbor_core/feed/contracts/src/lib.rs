use std::future::Future;

use harbor_models::{
    job::{JobId, JobPosting},
    pagination::{PageNumber, PageSize},
};
use thiserror::Error;

/// Supplies normalized job postings, from the remote job source if possible
/// and from the built-in dataset otherwise.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobFeedService: Send + Sync + 'static {
    /// Returns the postings of the given page.
    ///
    /// Never fails: if the remote source cannot be used, the page is cut from
    /// the built-in dataset. An empty result means there are no more pages.
    fn fetch_page(
        &self,
        page: PageNumber,
        size: PageSize,
    ) -> impl Future<Output = Vec<JobPosting>> + Send;

    /// Returns the posting with the given id.
    fn fetch_by_id(
        &self,
        id: &JobId,
    ) -> impl Future<Output = Result<JobPosting, FeedFetchByIdError>> + Send;
}

#[derive(Debug, Error)]
pub enum FeedFetchByIdError {
    #[error("Job posting not found.")]
    NotFound,
}

#[cfg(feature = "mock")]
impl MockJobFeedService {
    pub fn with_fetch_page(
        mut self,
        page: PageNumber,
        size: PageSize,
        result: Vec<JobPosting>,
    ) -> Self {
        self.expect_fetch_page()
            .once()
            .with(mockall::predicate::eq(page), mockall::predicate::eq(size))
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_fetch_by_id(mut self, id: JobId, result: Option<JobPosting>) -> Self {
        self.expect_fetch_by_id()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| {
                Box::pin(std::future::ready(
                    result.ok_or(FeedFetchByIdError::NotFound),
                ))
            });
        self
    }
}
