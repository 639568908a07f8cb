use anyhow::Context;
use harbor_config::Config;
use harbor_core_bookmarks_impl::BookmarkStoreImpl;
use harbor_core_feed_impl::{
    pager::JobFeedPager, JobFeedServiceConfig, JobFeedServiceImpl, RemoteSource,
};
use harbor_core_theme_impl::ThemeServiceImpl;
use harbor_extern_impl::{
    http::HttpClient,
    jobs::{JobsApiServiceConfig, JobsApiServiceImpl},
};
use harbor_models::pagination::PageSize;
use harbor_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use types::{Bookmarks, Feed, Pager, Store, Theme, Time};

use crate::storage;

pub mod types;

/// Wires the services together from the loaded configuration.
#[derive(Debug, Clone)]
pub struct Environment {
    store: Store,
    feed: Feed,
    page_size: PageSize,
}

impl Environment {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store = storage::open(&config.storage).await?;

        let http = HttpClient::new(config.jobs_api.timeout.into())?;
        let jobs_api = JobsApiServiceImpl::new(
            JobsApiServiceConfig::new(config.jobs_api.base_url.clone()),
            http,
        );

        let remote = if config.jobs_api.available {
            RemoteSource::Available
        } else {
            RemoteSource::Unavailable {
                list_latency: config.jobs_api.list_latency.into(),
                get_latency: config.jobs_api.get_latency.into(),
            }
        };

        let feed = JobFeedServiceImpl::new(
            jobs_api,
            TimeServiceImpl,
            IdServiceImpl::default(),
            JobFeedServiceConfig { remote },
        );

        let page_size = PageSize::try_new(config.feed.page_size).with_context(|| {
            format!(
                "Invalid feed page size {}, must be between 1 and {}",
                config.feed.page_size,
                PageSize::MAX
            )
        })?;

        Ok(Self {
            store,
            feed,
            page_size,
        })
    }

    pub fn time(&self) -> Time {
        TimeServiceImpl
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn feed(&self) -> Feed {
        self.feed.clone()
    }

    pub fn pager(&self) -> Pager {
        JobFeedPager::new(self.feed(), self.page_size)
    }

    /// Starts a bookmark store, which begins loading immediately.
    pub fn bookmarks(&self) -> Bookmarks {
        BookmarkStoreImpl::start(self.store.clone())
    }

    pub fn theme(&self) -> Theme {
        ThemeServiceImpl::new(self.store.clone())
    }
}
