use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Employment type shown on a job card and used by the job-type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job type: {0}")]
pub struct UnknownJobType(pub String);

impl FromStr for JobType {
    type Err = UnknownJobType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownJobType(s.to_string()))
    }
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub logo: String,
    pub location: String,
    /// Display string, e.g. `"$100,000 - $130,000"`.
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Days since the job was posted.
    pub posted_days_ago: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl Job {
    /// Lower and upper bound of the advertised salary.
    ///
    /// Understands `"$85,000 - $105,000"`, `"$80k - $100k"` and single values
    /// such as `"$130k+"`. Returns `None` when no amount can be read.
    pub fn salary_range(&self) -> Option<(u32, u32)> {
        let mut bounds = self.salary.split('-').filter_map(parse_amount);
        let low = bounds.next()?;
        let high = bounds.next().unwrap_or(low);
        Some((low.min(high), low.max(high)))
    }

    /// Human label for the posting age.
    pub fn posted_label(&self) -> String {
        match self.posted_days_ago {
            0 => "Today".to_string(),
            1 => "1 day ago".to_string(),
            d if d < 7 => format!("{d} days ago"),
            d if d < 14 => "1 week ago".to_string(),
            d => format!("{} weeks ago", d / 7),
        }
    }
}

fn parse_amount(part: &str) -> Option<u32> {
    let digits: String = part.chars().filter(char::is_ascii_digit).collect();
    let value: u32 = digits.parse().ok()?;
    if part.trim_end_matches('+').trim().to_ascii_lowercase().ends_with('k') {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

/// A brand in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    pub category: String,
    pub location: String,
    /// Display band, e.g. `"100-500"`.
    pub employee_count: String,
    pub year_founded: u16,
    /// Number of open jobs.
    pub job_count: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(salary: &str, posted_days_ago: u32) -> Job {
        Job {
            id: "1".to_string(),
            title: "Shopify Developer".to_string(),
            company: "Allbirds".to_string(),
            logo: String::new(),
            location: "Remote".to_string(),
            salary: salary.to_string(),
            job_type: JobType::FullTime,
            posted_days_ago,
            tags: vec![],
            is_featured: false,
        }
    }

    #[test]
    fn test_salary_range() {
        assert_eq!(
            job("$100,000 - $130,000", 0).salary_range(),
            Some((100_000, 130_000))
        );
        assert_eq!(job("$80k - $100k", 0).salary_range(), Some((80_000, 100_000)));
        assert_eq!(job("$130k+", 0).salary_range(), Some((130_000, 130_000)));
        assert_eq!(job("Competitive", 0).salary_range(), None);
    }

    #[test]
    fn test_posted_label() {
        assert_eq!(job("", 0).posted_label(), "Today");
        assert_eq!(job("", 3).posted_label(), "3 days ago");
        assert_eq!(job("", 7).posted_label(), "1 week ago");
        assert_eq!(job("", 15).posted_label(), "2 weeks ago");
    }

    #[test]
    fn test_job_type_names() {
        assert_eq!("Full-time".parse::<JobType>(), Ok(JobType::FullTime));
        assert!("full-time".parse::<JobType>().is_err());
        assert_eq!(
            serde_json::to_value(JobType::PartTime).unwrap(),
            serde_json::json!("Part-time")
        );
    }
}
