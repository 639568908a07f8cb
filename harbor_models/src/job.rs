use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::search::SearchTerm;

/// Opaque identifier of a job posting.
///
/// Ids are only guaranteed to be unique within a single feed page.
#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    AsRef,
    From,
    Display,
    Serialize,
    Deserialize,
))]
pub struct JobId(String);

/// The canonical, normalized job record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    #[serde(default = "JobPosting::default_title")]
    pub title: String,
    #[serde(default = "JobPosting::default_company")]
    pub company: String,
    #[serde(default = "JobPosting::default_location")]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub posted_at: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl JobPosting {
    pub const DEFAULT_TITLE: &'static str = "Untitled Position";
    pub const DEFAULT_COMPANY: &'static str = "Unknown Company";
    pub const DEFAULT_LOCATION: &'static str = "Remote";

    fn default_title() -> String {
        Self::DEFAULT_TITLE.into()
    }

    fn default_company() -> String {
        Self::DEFAULT_COMPANY.into()
    }

    fn default_location() -> String {
        Self::DEFAULT_LOCATION.into()
    }

    /// Whether the posting's title, location or company contains the search
    /// term (case-insensitive). An empty term matches every posting.
    pub fn matches(&self, term: &SearchTerm) -> bool {
        let term = term.as_str();
        term.is_empty()
            || [&self.title, &self.location, &self.company]
                .into_iter()
                .any(|field| field.to_lowercase().contains(term))
    }
}

/// Salary information as published by the job source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    Range(SalaryRange),
    /// Preformatted text, displayed unchanged.
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}
