use harbor_core_bookmarks_impl::BookmarkStoreImpl;
use harbor_core_feed_impl::{pager::JobFeedPager, JobFeedServiceImpl};
use harbor_core_theme_impl::ThemeServiceImpl;
use harbor_extern_impl::jobs::JobsApiServiceImpl;
use harbor_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use harbor_storage_file::FileStore;

// Storage
pub type Store = FileStore;

// Extern
pub type JobsApi = JobsApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
pub type Id = IdServiceImpl;

// Core
pub type Feed = JobFeedServiceImpl<JobsApi, Time, Id>;
pub type Pager = JobFeedPager<Feed>;
pub type Bookmarks = BookmarkStoreImpl;
pub type Theme = ThemeServiceImpl<Store>;
