use std::sync::Arc;

use anyhow::Context;
use harbor_extern_contracts::jobs::{JobsApiService, RawJobList, RawJobRecord};
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::http::HttpClient;

const DEFAULT_BASE_URL: &str = "https://testapi.getlokalapp.com/common/";

#[derive(Debug, Clone)]
pub struct JobsApiServiceImpl {
    config: JobsApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct JobsApiServiceConfig {
    base_url: Arc<Url>,
}

impl JobsApiServiceConfig {
    pub fn new(base_url_override: Option<Url>) -> Self {
        let mut base_url = base_url_override.unwrap_or_else(|| DEFAULT_BASE_URL.parse().unwrap());
        // `Url::join` would replace the last path segment otherwise
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl JobsApiServiceImpl {
    pub fn new(config: JobsApiServiceConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

impl JobsApiService for JobsApiServiceImpl {
    #[tracing::instrument(skip(self))]
    async fn list_jobs(&self, page: u32, limit: u32) -> anyhow::Result<Vec<RawJobRecord>> {
        let url = self
            .config
            .base_url
            .join("jobs")
            .context("Failed to build jobs list URL")?;

        let jobs = self
            .http
            .get(url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .context("Failed to send jobs list request")?
            .error_for_status()
            .context("Jobs list request returned an error")?
            .json::<RawJobList>()
            .await
            .context("Failed to deserialize jobs list response")?;

        let jobs = Vec::from(jobs);
        debug!(count = jobs.len(), "received job records");
        Ok(jobs)
    }

    #[tracing::instrument(skip(self))]
    async fn get_job(&self, id: &str) -> anyhow::Result<Option<RawJobRecord>> {
        let mut url = self
            .config
            .base_url
            .join("jobs/")
            .context("Failed to build job URL")?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("Base URL cannot have path segments"))?
            .pop_if_empty()
            .push(id);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send job request")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        response
            .error_for_status()
            .context("Job request returned an error")?
            .json::<RawJobRecord>()
            .await
            .map(Some)
            .context("Failed to deserialize job response")
    }
}
