use chrono::SecondsFormat;
use harbor_extern_contracts::jobs::RawJobRecord;
use harbor_models::job::{JobId, JobPosting, Salary, SalaryRange};
use harbor_shared_contracts::{id::IdService, time::TimeService};
use serde_json::Value;

/// Turns a raw remote record into a [`JobPosting`], filling in defaults for
/// every missing field. Empty strings count as missing.
///
/// `id` is used if the record has no usable id of its own; otherwise a random
/// token is generated.
pub fn normalize(
    record: RawJobRecord,
    id: Option<&JobId>,
    time: &impl TimeService,
    id_service: &impl IdService,
) -> JobPosting {
    let id = record
        .id
        .as_ref()
        .and_then(normalize_id)
        .or_else(|| id.cloned())
        .unwrap_or_else(|| id_service.generate_token().into());

    let posted_at = non_empty(record.posted_at)
        .unwrap_or_else(|| time.now().to_rfc3339_opts(SecondsFormat::Millis, true));

    JobPosting {
        id,
        title: non_empty(record.title).unwrap_or_else(|| JobPosting::DEFAULT_TITLE.into()),
        company: non_empty(record.company).unwrap_or_else(|| JobPosting::DEFAULT_COMPANY.into()),
        location: non_empty(record.location)
            .unwrap_or_else(|| JobPosting::DEFAULT_LOCATION.into()),
        description: non_empty(record.description),
        requirements: non_empty(record.requirements),
        salary: record.salary.as_ref().and_then(normalize_salary),
        phone: non_empty(record.phone),
        email: non_empty(record.email),
        website: non_empty(record.website),
        posted_at,
        skills: record.skills.unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn normalize_id(value: &Value) -> Option<JobId> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.as_str().into()),
        Value::Number(n) => Some(n.to_string().into()),
        _ => None,
    }
}

fn normalize_salary(value: &Value) -> Option<Salary> {
    let amount = |value: &Value| value.as_f64().filter(|&x| x != 0.0 && x.is_finite());

    match value {
        Value::Number(_) => amount(value).map(Salary::Amount),
        Value::String(s) if !s.is_empty() => Some(Salary::Text(s.clone())),
        Value::Object(obj) => Some(Salary::Range(SalaryRange {
            min: amount(obj.get("min")?)?,
            max: amount(obj.get("max")?)?,
        })),
        _ => None,
    }
}
