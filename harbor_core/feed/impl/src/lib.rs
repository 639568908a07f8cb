use std::time::Duration;

use harbor_core_feed_contracts::{FeedFetchByIdError, JobFeedService};
use harbor_extern_contracts::jobs::JobsApiService;
use harbor_models::{
    job::{JobId, JobPosting},
    pagination::{paginate, PageNumber, PageSize},
};
use harbor_shared_contracts::{id::IdService, time::TimeService};
use tracing::{debug, info, warn};

use crate::{dataset::builtin_jobs, normalize::normalize};

pub mod dataset;
mod normalize;
pub mod pager;

#[derive(Debug, Clone)]
pub struct JobFeedServiceImpl<JobsApi, Time, Id> {
    jobs_api: JobsApi,
    time: Time,
    id: Id,
    config: JobFeedServiceConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct JobFeedServiceConfig {
    pub remote: RemoteSource,
}

/// Whether the remote job source may be contacted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteSource {
    Available,
    /// Never contact the remote source. The built-in dataset is served after
    /// the given delays, so callers see the same timing as with a network
    /// round trip.
    Unavailable {
        list_latency: Duration,
        get_latency: Duration,
    },
}

impl<JobsApi, Time, Id> JobFeedServiceImpl<JobsApi, Time, Id> {
    pub fn new(jobs_api: JobsApi, time: Time, id: Id, config: JobFeedServiceConfig) -> Self {
        Self {
            jobs_api,
            time,
            id,
            config,
        }
    }
}

impl<JobsApi, Time, Id> JobFeedService for JobFeedServiceImpl<JobsApi, Time, Id>
where
    JobsApi: JobsApiService,
    Time: TimeService,
    Id: IdService,
{
    #[tracing::instrument(skip(self))]
    async fn fetch_page(&self, page: PageNumber, size: PageSize) -> Vec<JobPosting> {
        match self.config.remote {
            RemoteSource::Available => {
                match self.jobs_api.list_jobs(*page, *size).await {
                    Ok(records) => {
                        debug!(count = records.len(), "fetched jobs from remote source");
                        return records
                            .into_iter()
                            .take(size.into_inner() as usize)
                            .map(|record| normalize(record, None, &self.time, &self.id))
                            .collect();
                    }
                    Err(err) => {
                        warn!("Failed to fetch jobs, using built-in dataset: {err:#}");
                    }
                }
            }
            RemoteSource::Unavailable { list_latency, .. } => {
                info!("Remote job source unavailable, using built-in dataset");
                tokio::time::sleep(list_latency).await;
            }
        }

        paginate(builtin_jobs(), page, size).to_vec()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_by_id(&self, id: &JobId) -> Result<JobPosting, FeedFetchByIdError> {
        match self.config.remote {
            RemoteSource::Available => match self.jobs_api.get_job(id).await {
                Ok(Some(record)) => {
                    return Ok(normalize(record, Some(id), &self.time, &self.id));
                }
                Ok(None) => debug!("Job not known to remote source"),
                Err(err) => {
                    warn!("Failed to fetch job, searching built-in dataset: {err:#}");
                }
            },
            RemoteSource::Unavailable { get_latency, .. } => {
                info!("Remote job source unavailable, searching built-in dataset");
                tokio::time::sleep(get_latency).await;
            }
        }

        builtin_jobs()
            .iter()
            .find(|job| job.id == *id)
            .cloned()
            .ok_or(FeedFetchByIdError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use harbor_extern_contracts::jobs::{MockJobsApiService, RawJobRecord};
    use harbor_shared_contracts::{id::MockIdService, time::MockTimeService};
    use harbor_utils::assert_matches;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    use super::*;

    type Sut = JobFeedServiceImpl<MockJobsApiService, MockTimeService, MockIdService>;

    const UNAVAILABLE: RemoteSource = RemoteSource::Unavailable {
        list_latency: Duration::from_millis(800),
        get_latency: Duration::from_millis(500),
    };

    fn make_sut(jobs_api: MockJobsApiService, remote: RemoteSource) -> Sut {
        JobFeedServiceImpl::new(
            jobs_api,
            MockTimeService::new(),
            MockIdService::new(),
            JobFeedServiceConfig { remote },
        )
    }

    fn page(n: u32) -> PageNumber {
        PageNumber::try_new(n).unwrap()
    }

    fn size(n: u32) -> PageSize {
        PageSize::try_new(n).unwrap()
    }

    fn record(id: &str, title: &str) -> RawJobRecord {
        RawJobRecord {
            id: Some(id.into()),
            title: Some(title.into()),
            posted_at: Some("2025-04-01T08:00:00Z".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fetch_page_remote() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_list_jobs(
            2,
            2,
            vec![record("a", "Driver"), record("b", "Cook")],
        );
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_page(page(2), size(2)).await;

        // Assert
        let ids = result.iter().map(|j| j.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(result[1].title, "Cook");
        assert_eq!(result[1].company, JobPosting::DEFAULT_COMPANY);
    }

    #[tokio::test]
    async fn fetch_page_remote_caps_page_size() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_list_jobs(
            1,
            1,
            vec![record("a", "Driver"), record("b", "Cook")],
        );
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_page(page(1), size(1)).await;

        // Assert
        assert_eq!(result.len(), 1);
    }

    #[tokio::test]
    async fn fetch_page_remote_failure_falls_back() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_list_jobs_error(1, 2);
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_page(page(1), size(2)).await;

        // Assert
        assert_eq!(result, builtin_jobs()[..2]);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_page_unavailable_skips_network() {
        // Arrange
        let sut = make_sut(MockJobsApiService::new(), UNAVAILABLE);
        let start = Instant::now();

        // Act
        let result = sut.fetch_page(page(1), size(10)).await;

        // Assert
        assert_eq!(result, builtin_jobs());
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_page_past_end_is_empty() {
        let sut = make_sut(MockJobsApiService::new(), UNAVAILABLE);
        let result = sut.fetch_page(page(2), size(10)).await;
        assert!(result.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn pages_concatenate_to_dataset() {
        let sut = make_sut(MockJobsApiService::new(), UNAVAILABLE);

        for n in 1..=6 {
            let mut all = Vec::new();
            for p in 1.. {
                let jobs = sut.fetch_page(page(p), size(n)).await;
                assert!(jobs.len() <= n as usize);
                if jobs.is_empty() {
                    break;
                }
                all.extend(jobs);
            }
            assert_eq!(all, builtin_jobs(), "page size {n}");
        }
    }

    #[tokio::test]
    async fn fetch_by_id_remote() {
        // Arrange
        let jobs_api =
            MockJobsApiService::new().with_get_job("a".into(), Some(record("a", "Driver")));
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_by_id(&"a".into()).await.unwrap();

        // Assert
        assert_eq!(result.id, JobId::from("a"));
        assert_eq!(result.title, "Driver");
    }

    #[tokio::test]
    async fn fetch_by_id_remote_record_without_id() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_get_job(
            "a".into(),
            Some(RawJobRecord {
                posted_at: Some("2025-04-01T08:00:00Z".into()),
                ..Default::default()
            }),
        );
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_by_id(&"a".into()).await.unwrap();

        // Assert
        assert_eq!(result.id, JobId::from("a"));
    }

    #[tokio::test]
    async fn fetch_by_id_remote_failure_falls_back() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_get_job_error("1".into());
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_by_id(&"1".into()).await.unwrap();

        // Assert
        assert_eq!(result.id, JobId::from("1"));
        assert_eq!(result, builtin_jobs()[0]);
    }

    #[tokio::test]
    async fn fetch_by_id_remote_miss_falls_back() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_get_job("3".into(), None);
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_by_id(&"3".into()).await.unwrap();

        // Assert
        assert_eq!(result.title, "Mobile App Designer");
    }

    #[tokio::test]
    async fn fetch_by_id_not_found() {
        // Arrange
        let jobs_api = MockJobsApiService::new().with_get_job_error("does-not-exist".into());
        let sut = make_sut(jobs_api, RemoteSource::Available);

        // Act
        let result = sut.fetch_by_id(&"does-not-exist".into()).await;

        // Assert
        assert_matches!(result, Err(FeedFetchByIdError::NotFound));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_by_id_unavailable() {
        // Arrange
        let sut = make_sut(MockJobsApiService::new(), UNAVAILABLE);
        let start = Instant::now();

        // Act
        let found = sut.fetch_by_id(&"1".into()).await;
        let missing = sut.fetch_by_id(&"does-not-exist".into()).await;

        // Assert
        assert_matches!(found, Ok(job) if job.id.as_str() == "1");
        assert_matches!(missing, Err(FeedFetchByIdError::NotFound));
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
