use std::sync::LazyLock;

use harbor_models::job::{JobId, JobPosting, Salary, SalaryRange};

pub const POSTED_AT_1: &str = "2025-03-15T10:00:00Z";
pub const POSTED_AT_2: &str = "2025-03-20T14:30:00Z";

pub static JOB_FOO: LazyLock<JobPosting> = LazyLock::new(|| JobPosting {
    id: "foo".into(),
    title: "Rust Engineer".into(),
    company: "Foo Systems".into(),
    location: "Berlin, DE".into(),
    description: Some("Build fast things.".into()),
    requirements: Some("Ownership and borrowing.".into()),
    salary: Some(Salary::Amount(85000.0)),
    phone: Some("(555) 000-0001".into()),
    email: Some("jobs@foo.example".into()),
    website: Some("https://foo.example/careers".into()),
    posted_at: POSTED_AT_1.into(),
    skills: vec!["Rust".into(), "Tokio".into()],
});

pub static JOB_BAR: LazyLock<JobPosting> = LazyLock::new(|| JobPosting {
    id: "bar".into(),
    title: "Site Reliability Engineer".into(),
    company: "Bar Cloud".into(),
    location: "Remote".into(),
    description: None,
    requirements: None,
    salary: Some(Salary::Range(SalaryRange {
        min: 90000.0,
        max: 110000.0,
    })),
    phone: None,
    email: None,
    website: None,
    posted_at: POSTED_AT_2.into(),
    skills: Vec::new(),
});

pub static JOB_BAZ: LazyLock<JobPosting> = LazyLock::new(|| JobPosting {
    id: "baz".into(),
    title: "Technical Writer".into(),
    company: "Baz Docs".into(),
    location: "Lisbon, PT".into(),
    description: None,
    requirements: None,
    salary: None,
    phone: None,
    email: None,
    website: None,
    posted_at: POSTED_AT_2.into(),
    skills: vec!["Markdown".into()],
});

/// Returns a copy of `job` with a different id.
pub fn with_id(job: &JobPosting, id: &str) -> JobPosting {
    JobPosting {
        id: JobId::from(id),
        ..job.clone()
    }
}
