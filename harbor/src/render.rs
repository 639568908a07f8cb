//! Plain text rendering of job postings for the terminal.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use harbor_models::{
    format::{format_date, format_salary, truncate_text},
    job::JobPosting,
};

const CARD_DESCRIPTION_CHARS: usize = 100;
const BOOKMARK_MARKER: &str = "★";

/// One job posting as a short card.
pub fn card(job: &JobPosting, bookmarked: bool, now: DateTime<Utc>) -> String {
    let marker = if bookmarked { BOOKMARK_MARKER } else { " " };
    let mut out = format!("{marker} [{}] {}\n", job.id, job.title);
    let _ = writeln!(out, "    {} · {}", job.company, job.location);
    let _ = writeln!(out, "    {}", format_salary(job.salary.as_ref()));

    if let Some(description) = job.description.as_deref() {
        let _ = writeln!(out, "    {}", truncate_text(description, CARD_DESCRIPTION_CHARS));
    }

    let posted = format_date(&job.posted_at, now);
    if !posted.is_empty() {
        let _ = writeln!(out, "    Posted {posted}");
    }

    out
}

/// All details of a job posting.
pub fn details(job: &JobPosting, bookmarked: bool, now: DateTime<Utc>) -> String {
    let mut out = format!("{}\n{}\n\n", job.title, "=".repeat(job.title.chars().count()));

    let posted = format_date(&job.posted_at, now);
    for (label, value) in [
        ("Id", job.id.to_string()),
        ("Company", job.company.clone()),
        ("Location", job.location.clone()),
        ("Salary", format_salary(job.salary.as_ref())),
        ("Posted", posted),
        ("Bookmarked", if bookmarked { "yes" } else { "no" }.into()),
    ] {
        if !value.is_empty() {
            let _ = writeln!(out, "{label:<11}{value}");
        }
    }

    if !job.skills.is_empty() {
        let _ = writeln!(out, "{:<11}{}", "Skills", job.skills.join(", "));
    }

    for (heading, text) in [
        ("Description", &job.description),
        ("Requirements", &job.requirements),
    ] {
        if let Some(text) = text {
            let _ = write!(out, "\n{heading}\n{text}\n");
        }
    }

    let contact = [
        ("Phone", &job.phone),
        ("Email", &job.email),
        ("Website", &job.website),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|value| (label, value)))
    .collect::<Vec<_>>();

    if !contact.is_empty() {
        out.push_str("\nContact\n");
        for (label, value) in contact {
            let _ = writeln!(out, "{label:<11}{value}");
        }
    }

    out
}
