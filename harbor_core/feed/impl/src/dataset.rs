//! The built-in dataset served when the remote job source cannot be used.

use std::sync::LazyLock;

use harbor_models::job::{JobPosting, Salary};

pub fn builtin_jobs() -> &'static [JobPosting] {
    &BUILTIN_JOBS
}

static BUILTIN_JOBS: LazyLock<Vec<JobPosting>> = LazyLock::new(|| {
    vec![
        posting(
            "1",
            "Senior React Native Developer",
            "TechCorp",
            "San Francisco, CA",
            "We are looking for an experienced React Native developer to join our mobile team. You will be responsible for building cross-platform mobile applications using React Native.",
            "At least 3 years of experience with React Native. Proficiency in JavaScript/TypeScript. Experience with state management solutions like Redux or Context API.",
            120000.0,
            ["(555) 123-4567", "jobs@techcorp.com", "https://techcorp.com/careers"],
            "2025-03-15T10:00:00Z",
            &["React Native", "JavaScript", "TypeScript", "Redux", "API Integration"],
        ),
        posting(
            "2",
            "Frontend Developer",
            "WebSolutions Inc.",
            "Remote",
            "WebSolutions is seeking a talented Frontend Developer to create responsive and intuitive user interfaces for our web applications.",
            "Strong HTML, CSS, and JavaScript skills. Experience with modern frontend frameworks like React, Vue, or Angular.",
            95000.0,
            ["(555) 987-6543", "careers@websolutions.com", "https://websolutions.com/jobs"],
            "2025-03-20T14:30:00Z",
            &["HTML", "CSS", "JavaScript", "React", "Responsive Design"],
        ),
        posting(
            "3",
            "Mobile App Designer",
            "CreativeUX",
            "New York, NY",
            "Join our design team to create beautiful and functional mobile app interfaces that delight users.",
            "Portfolio showcasing mobile UI/UX design. Proficiency with design tools like Figma or Sketch. Understanding of mobile design principles.",
            90000.0,
            ["(555) 456-7890", "design@creativeUX.com", "https://creativeUX.com"],
            "2025-03-22T09:15:00Z",
            &["UI/UX Design", "Figma", "Mobile Design", "Prototyping", "User Research"],
        ),
        posting(
            "4",
            "DevOps Engineer",
            "CloudSystems",
            "Chicago, IL",
            "CloudSystems is looking for a DevOps Engineer to help automate and optimize our infrastructure and deployment processes.",
            "Experience with CI/CD pipelines. Knowledge of AWS or Azure. Familiarity with containerization technologies like Docker and Kubernetes.",
            115000.0,
            ["(555) 234-5678", "hiring@cloudsystems.com", "https://cloudsystems.com/careers"],
            "2025-03-18T11:45:00Z",
            &["DevOps", "AWS", "Docker", "Kubernetes", "CI/CD"],
        ),
        posting(
            "5",
            "Backend Developer",
            "DataTech",
            "Austin, TX",
            "Build robust and scalable backend services for our data processing platform.",
            "Strong experience with Node.js, Python, or Java. Knowledge of database design and optimization. Experience with RESTful API development.",
            110000.0,
            ["(555) 876-5432", "jobs@datatech.io", "https://datatech.io"],
            "2025-03-25T13:20:00Z",
            &["Node.js", "Python", "SQL", "RESTful APIs", "Database Design"],
        ),
    ]
});

#[allow(clippy::too_many_arguments, reason = "dataset literal")]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    requirements: &str,
    salary: f64,
    [phone, email, website]: [&str; 3],
    posted_at: &str,
    skills: &[&str],
) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: location.into(),
        description: Some(description.into()),
        requirements: Some(requirements.into()),
        salary: Some(Salary::Amount(salary)),
        phone: Some(phone.into()),
        email: Some(email.into()),
        website: Some(website.into()),
        posted_at: posted_at.into(),
        skills: skills.iter().map(|&s| s.into()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids = builtin_jobs().iter().map(|j| &j.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), builtin_jobs().len());
    }
}
