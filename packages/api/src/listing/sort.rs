//! Sort orders offered by the "Sort by" pickers.
//!
//! Sorting is stable, so items that compare equal keep their filtered order.
//! Both enums parse from the picker values (`"salary-high"`, `"jobs"`, ...).

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Brand, Job};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobSort {
    /// Keep the board's order.
    #[default]
    Relevance,
    Recent,
    SalaryHigh,
    SalaryLow,
}

impl FromStr for JobSort {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(JobSort::Relevance),
            "recent" => Ok(JobSort::Recent),
            "salary-high" => Ok(JobSort::SalaryHigh),
            "salary-low" => Ok(JobSort::SalaryLow),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandSort {
    #[default]
    Alphabetical,
    #[serde(rename = "jobs")]
    MostJobs,
    Newest,
    Oldest,
}

impl FromStr for BrandSort {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetical" => Ok(BrandSort::Alphabetical),
            "jobs" => Ok(BrandSort::MostJobs),
            "newest" => Ok(BrandSort::Newest),
            "oldest" => Ok(BrandSort::Oldest),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

/// Orders `Some` before `None`, comparing present values with `cmp`.
fn present_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_jobs(jobs: &mut [&Job], order: JobSort) {
    match order {
        JobSort::Relevance => {}
        JobSort::Recent => jobs.sort_by_key(|job| job.posted_days_ago),
        JobSort::SalaryHigh => jobs.sort_by(|a, b| {
            present_first(
                a.salary_range().map(|(_, high)| high),
                b.salary_range().map(|(_, high)| high),
                |a, b| b.cmp(&a),
            )
        }),
        JobSort::SalaryLow => jobs.sort_by(|a, b| {
            present_first(
                a.salary_range().map(|(low, _)| low),
                b.salary_range().map(|(low, _)| low),
                |a, b| a.cmp(&b),
            )
        }),
    }
}

pub fn sort_brands(brands: &mut [&Brand], order: BrandSort) {
    match order {
        BrandSort::Alphabetical => brands.sort_by_cached_key(|brand| brand.name.to_lowercase()),
        BrandSort::MostJobs => brands.sort_by(|a, b| b.job_count.cmp(&a.job_count)),
        BrandSort::Newest => brands.sort_by(|a, b| b.year_founded.cmp(&a.year_founded)),
        BrandSort::Oldest => brands.sort_by_key(|brand| brand.year_founded),
    }
}
