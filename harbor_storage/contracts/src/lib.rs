use std::future::Future;

/// Keys of the slots used in the key-value store.
pub mod keys {
    /// JSON array of bookmarked job postings.
    pub const BOOKMARKS: &str = "@job_app_bookmarks";
    /// One of `light`, `dark` or `system`.
    pub const THEME_PREFERENCE: &str = "@job_app_theme";
}

/// A durable store mapping string keys to string values.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait KeyValueStore: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = anyhow::Result<Option<String>>> + Send;

    /// Creates or replaces the value stored under `key`.
    ///
    /// Either the whole value is written or, on error, the previous value is
    /// left untouched.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockKeyValueStore {
    pub fn with_get(mut self, key: String, result: Option<String>) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_error(mut self, key: String) -> Self {
        self.expect_get()
            .once()
            .with(mockall::predicate::eq(key))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("storage unavailable"))))
            });
        self
    }

    pub fn with_set(mut self, key: String, value: String) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::eq(value))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_set_error(mut self, key: String, value: String) -> Self {
        self.expect_set()
            .once()
            .with(mockall::predicate::eq(key), mockall::predicate::eq(value))
            .return_once(|_, _| Box::pin(std::future::ready(Err(anyhow::anyhow!("disk full")))));
        self
    }
}
