use harbor_core_feed_contracts::JobFeedService;
use harbor_models::{
    job::JobPosting,
    pagination::{PageNumber, PageSize},
    search::{self, SearchTerm},
};
use tracing::debug;

/// Accumulates consecutive feed pages for an infinitely scrolling list.
///
/// All loading methods take `&mut self`, so two loads can never overlap.
#[derive(Debug)]
pub struct JobFeedPager<Feed> {
    feed: Feed,
    page_size: PageSize,
    page: Option<PageNumber>,
    jobs: Vec<JobPosting>,
    has_more: bool,
}

impl<Feed: JobFeedService> JobFeedPager<Feed> {
    pub fn new(feed: Feed, page_size: PageSize) -> Self {
        Self {
            feed,
            page_size,
            page: None,
            jobs: Vec::new(),
            has_more: true,
        }
    }

    /// Reloads the first page, replacing everything loaded so far.
    pub async fn refresh(&mut self) -> &[JobPosting] {
        let jobs = self.feed.fetch_page(PageNumber::first(), self.page_size).await;
        self.has_more = !jobs.is_empty();
        self.page = self.has_more.then(PageNumber::first);
        self.jobs = jobs;
        &self.jobs
    }

    /// Appends the next page. Returns `false` if nothing was added because
    /// the end of the feed has been reached.
    pub async fn load_more(&mut self) -> bool {
        if !self.has_more {
            return false;
        }

        let next = self.page.map_or_else(PageNumber::first, PageNumber::next);
        let jobs = self.feed.fetch_page(next, self.page_size).await;
        if jobs.is_empty() {
            debug!(page = %next, "end of feed reached");
            self.has_more = false;
            return false;
        }

        self.jobs.extend(jobs);
        self.page = Some(next);
        true
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    /// The last page that was loaded successfully.
    pub fn page(&self) -> Option<PageNumber> {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The loaded postings matching `term`.
    pub fn search(&self, term: &SearchTerm) -> Vec<&JobPosting> {
        search::filter(&self.jobs, term)
    }
}
