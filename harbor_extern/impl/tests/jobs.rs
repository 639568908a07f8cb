use std::time::Duration;

use harbor_extern_contracts::jobs::JobsApiService;
use harbor_extern_impl::{
    http::HttpClient,
    jobs::{JobsApiServiceConfig, JobsApiServiceImpl},
};
use harbor_testing::jobs::{FakeJobsOptions, RECORD_COUNT};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::net::TcpListener;

#[tokio::test]
async fn list_first_page() {
    let sut = make_sut(FakeJobsOptions::default()).await;

    let result = sut.list_jobs(1, 3).await.unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].id, Some(json!("r1")));
    assert_eq!(result[0].title.as_deref(), Some("Warehouse Associate"));
    assert_eq!(result[1].id, Some(json!(2)));
    assert_eq!(result[1].location, None);
    assert_eq!(result[2].company.as_deref(), Some(""));
}

#[tokio::test]
async fn list_past_end() {
    let sut = make_sut(FakeJobsOptions::default()).await;

    let last = sut.list_jobs(2, 10).await.unwrap();
    let empty = sut.list_jobs(3, 10).await.unwrap();

    assert_eq!(last.len(), RECORD_COUNT - 10);
    assert!(empty.is_empty());
}

#[tokio::test]
async fn list_wrapped() {
    let sut = make_sut(FakeJobsOptions {
        wrap: true,
        ..Default::default()
    })
    .await;

    let result = sut.list_jobs(1, 5).await.unwrap();

    assert_eq!(result.len(), 5);
    assert_eq!(result[3].id, None);
}

#[tokio::test]
async fn list_server_error() {
    let sut = make_sut(FakeJobsOptions {
        fail: true,
        ..Default::default()
    })
    .await;

    sut.list_jobs(1, 10).await.unwrap_err();
}

#[tokio::test]
async fn list_unreachable() {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let sut = JobsApiServiceImpl::new(
        JobsApiServiceConfig::new(Some(format!("http://127.0.0.1:{port}").parse().unwrap())),
        HttpClient::new(Duration::from_secs(5)).unwrap(),
    );

    sut.list_jobs(1, 10).await.unwrap_err();
}

#[tokio::test]
async fn get_by_string_and_number_id() {
    let sut = make_sut(FakeJobsOptions::default()).await;

    let r1 = sut.get_job("r1").await.unwrap().unwrap();
    let r2 = sut.get_job("2").await.unwrap().unwrap();

    assert_eq!(r1.company.as_deref(), Some("Northwind Logistics"));
    assert_eq!(r2.salary, Some(json!({ "min": 15000, "max": 22000 })));
}

#[tokio::test]
async fn get_not_found() {
    let sut = make_sut(FakeJobsOptions::default()).await;

    let result = sut.get_job("does-not-exist").await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn get_server_error() {
    let sut = make_sut(FakeJobsOptions {
        fail: true,
        ..Default::default()
    })
    .await;

    sut.get_job("r1").await.unwrap_err();
}

#[test]
fn base_url_trailing_slash() {
    let config = JobsApiServiceConfig::new(Some("http://localhost:8003/common".parse().unwrap()));
    assert_eq!(config.base_url().as_str(), "http://localhost:8003/common/");
}

async fn make_sut(options: FakeJobsOptions) -> JobsApiServiceImpl {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(harbor_testing::jobs::serve(listener, options));

    JobsApiServiceImpl::new(
        JobsApiServiceConfig::new(Some(format!("http://{addr}/").parse().unwrap())),
        HttpClient::new(Duration::from_secs(5)).unwrap(),
    )
}
