//! A fake of the remote job source.
//!
//! Serves a fixed list of deliberately loose job records: numeric and missing
//! ids, missing titles, every salary shape.

use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::info;

const LIST_ROUTE: &str = "/jobs";
const GET_ROUTE: &str = "/jobs/:id";

/// Number of records served by the fake.
pub const RECORD_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeJobsOptions {
    /// Answer every request with `500 Internal Server Error`.
    pub fail: bool,
    /// Wrap list responses in `{"results": [...]}`.
    pub wrap: bool,
}

pub async fn start_server(host: IpAddr, port: u16, options: FakeJobsOptions) -> anyhow::Result<()> {
    info!("Starting jobs api testing server on {host}:{port}");
    info!("List endpoint: http://{host}:{port}{LIST_ROUTE}?page=1&limit=10");
    info!("Serving {RECORD_COUNT} records, fail={}", options.fail);

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    serve(listener, options).await
}

pub async fn serve(listener: TcpListener, options: FakeJobsOptions) -> anyhow::Result<()> {
    axum::serve(listener, router(options))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(options: FakeJobsOptions) -> Router {
    let state = Arc::new(FakeState {
        options,
        records: records(),
    });

    Router::new()
        .route(LIST_ROUTE, routing::get(list))
        .route(GET_ROUTE, routing::get(get))
        .with_state(state)
}

struct FakeState {
    options: FakeJobsOptions,
    records: Vec<Value>,
}

#[derive(Deserialize)]
struct ListQuery {
    page: Option<usize>,
    limit: Option<usize>,
}

async fn list(State(state): State<Arc<FakeState>>, Query(query): Query<ListQuery>) -> Response {
    if state.options.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10);
    let start = (page - 1).saturating_mul(limit).min(state.records.len());
    let end = start.saturating_add(limit).min(state.records.len());
    let jobs = state.records[start..end].to_vec();

    if state.options.wrap {
        Json(json!({ "results": jobs })).into_response()
    } else {
        Json(jobs).into_response()
    }
}

async fn get(State(state): State<Arc<FakeState>>, Path(id): Path<String>) -> Response {
    if state.options.fail {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let found = state.records.iter().find(|record| match &record["id"] {
        Value::String(s) => *s == id,
        Value::Number(n) => n.to_string() == id,
        _ => false,
    });

    match found {
        Some(record) => Json(record.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The records served by the fake, in list order.
pub fn records() -> Vec<Value> {
    let mut records = vec![
        json!({
            "id": "r1",
            "title": "Warehouse Associate",
            "company": "Northwind Logistics",
            "location": "Pune",
            "description": "Pick, pack and ship orders.",
            "salary": 18000,
            "phone": "+91 90000 00001",
            "posted_at": "2025-04-01T08:00:00Z",
            "skills": ["Forklift", "Inventory"]
        }),
        json!({
            "id": 2,
            "title": "Delivery Partner",
            "company": "QuickDrop",
            "salary": { "min": 15000, "max": 22000 }
        }),
        json!({
            "id": "r3",
            "company": "",
            "location": null,
            "salary": "As per industry standards"
        }),
        json!({
            "title": "Telecaller"
        }),
    ];

    records.extend((records.len() + 1..=RECORD_COUNT).map(|i| {
        json!({
            "id": format!("r{i}"),
            "title": format!("Field Sales Executive {i}"),
            "company": "Contoso Retail",
            "location": "Mumbai",
            "salary": 20000 + i * 1000,
            "posted_at": "2025-04-10T12:00:00Z",
            "skills": ["Sales"]
        })
    }));

    records
}
