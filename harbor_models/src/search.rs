use nutype::nutype;

use crate::job::JobPosting;

/// A normalized search query: trimmed and lowercased.
#[nutype(
    sanitize(trim, lowercase),
    derive(Debug, Clone, PartialEq, Eq, Deref, AsRef, From, Display, Default),
    default = ""
)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// Returns the postings matching `term`, in their original order.
pub fn filter<'a>(
    jobs: impl IntoIterator<Item = &'a JobPosting>,
    term: &SearchTerm,
) -> Vec<&'a JobPosting> {
    jobs.into_iter().filter(|job| job.matches(term)).collect()
}
