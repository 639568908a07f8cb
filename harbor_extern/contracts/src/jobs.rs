use std::future::Future;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait JobsApiService: Send + Sync + 'static {
    /// Fetches one page of job records from the remote job source.
    fn list_jobs(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = anyhow::Result<Vec<RawJobRecord>>> + Send;

    /// Fetches a single job record. Returns `None` if the remote source does
    /// not know the id.
    fn get_job(&self, id: &str) -> impl Future<Output = anyhow::Result<Option<RawJobRecord>>> + Send;
}

/// A job record exactly as delivered by the remote source.
///
/// Every field may be missing or `null`. `id` may be a string or a number and
/// `salary` may be a number, a string or a `{min, max}` object, so both are
/// kept as raw JSON values.
///
/// Text fields holding a number or boolean keep its JSON representation, any
/// other mistyped value is treated as missing. A mistyped field never causes
/// the record to be rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobRecord {
    pub id: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub requirements: Option<String>,
    pub salary: Option<serde_json::Value>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub posted_at: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub skills: Option<Vec<String>>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar))
    }

    /// A single string becomes a one-element list, non-text elements are
    /// dropped.
    pub fn text_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => Some(items.into_iter().filter_map(scalar).collect()),
            Some(Value::String(s)) => Some(vec![s]),
            _ => None,
        })
    }
}

/// Body of a list response: either a bare array or wrapped in `results`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawJobList {
    Plain(Vec<RawJobRecord>),
    Wrapped { results: Vec<RawJobRecord> },
}

impl From<RawJobList> for Vec<RawJobRecord> {
    fn from(value: RawJobList) -> Self {
        match value {
            RawJobList::Plain(jobs) | RawJobList::Wrapped { results: jobs } => jobs,
        }
    }
}

#[cfg(feature = "mock")]
impl MockJobsApiService {
    pub fn with_list_jobs(mut self, page: u32, limit: u32, result: Vec<RawJobRecord>) -> Self {
        self.expect_list_jobs()
            .once()
            .with(mockall::predicate::eq(page), mockall::predicate::eq(limit))
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_jobs_error(mut self, page: u32, limit: u32) -> Self {
        self.expect_list_jobs()
            .once()
            .with(mockall::predicate::eq(page), mockall::predicate::eq(limit))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("connection refused"))))
            });
        self
    }

    pub fn with_get_job(mut self, id: String, result: Option<RawJobRecord>) -> Self {
        self.expect_get_job()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_job_error(mut self, id: String) -> Self {
        self.expect_get_job()
            .once()
            .with(mockall::predicate::eq(id))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("connection refused"))))
            });
        self
    }
}
