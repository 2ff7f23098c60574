//! Project filtering and sorting for the listings view.
//!
//! Filters combine with AND and run first; the surviving subset is then
//! sorted with a stable sort, so ties keep their input order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::normalize::{is_all, parse_roi};
use crate::error::{ReitError, Result};
use crate::models::Project;

// ---------------------------------------------------------------------------
// RoiBand
// ---------------------------------------------------------------------------

/// Named ROI ranges offered by the listings filter. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoiBand {
    #[default]
    #[serde(rename = "all")]
    All,
    /// 10 ≤ roi ≤ 12
    #[serde(rename = "10-12")]
    TenToTwelve,
    /// 12 ≤ roi ≤ 15
    #[serde(rename = "12-15")]
    TwelveToFifteen,
    /// roi ≥ 15
    #[serde(rename = "15+")]
    FifteenPlus,
}

impl RoiBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoiBand::All => "all",
            RoiBand::TenToTwelve => "10-12",
            RoiBand::TwelveToFifteen => "12-15",
            RoiBand::FifteenPlus => "15+",
        }
    }

    /// Whether a parsed ROI falls inside the band. `None` only matches `All`.
    pub fn contains(&self, roi: Option<f64>) -> bool {
        match (self, roi) {
            (RoiBand::All, _) => true,
            (_, None) => false,
            (RoiBand::TenToTwelve, Some(r)) => (10.0..=12.0).contains(&r),
            (RoiBand::TwelveToFifteen, Some(r)) => (12.0..=15.0).contains(&r),
            (RoiBand::FifteenPlus, Some(r)) => r >= 15.0,
        }
    }
}

impl FromStr for RoiBand {
    type Err = ReitError;

    fn from_str(s: &str) -> Result<Self> {
        if is_all(s) {
            return Ok(RoiBand::All);
        }
        match s.trim() {
            "10-12" => Ok(RoiBand::TenToTwelve),
            "12-15" => Ok(RoiBand::TwelveToFifteen),
            "15+" => Ok(RoiBand::FifteenPlus),
            other => Err(ReitError::InvalidArgument(format!(
                "unknown ROI band '{other}' (expected all, 10-12, 12-15 or 15+)"
            ))),
        }
    }
}

impl fmt::Display for RoiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Input order.
    #[default]
    Newest,
    RoiHigh,
    RoiLow,
    FundingHigh,
    FundingLow,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::RoiHigh => "roi-high",
            SortKey::RoiLow => "roi-low",
            SortKey::FundingHigh => "funding-high",
            SortKey::FundingLow => "funding-low",
        }
    }
}

/// Unrecognized keys fall back to [`SortKey::Newest`].
impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.trim() {
            "roi-high" => SortKey::RoiHigh,
            "roi-low" => SortKey::RoiLow,
            "funding-high" => SortKey::FundingHigh,
            "funding-low" => SortKey::FundingLow,
            _ => SortKey::Newest,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CriteriaParams
// ---------------------------------------------------------------------------

/// Raw filter selections as they arrive from a query string or form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub roi: Option<String>,
    pub sort: Option<String>,
}

// ---------------------------------------------------------------------------
// ProjectCriteria
// ---------------------------------------------------------------------------

/// Parsed listing filters.
///
/// `status` and `location` hold `None` for "all". The location selection is
/// carried but not applied: projects are not yet matched on location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCriteria {
    pub search_term: String,
    pub status: Option<String>,
    pub location: Option<String>,
    pub roi: RoiBand,
    pub sort_by: SortKey,
}

impl ProjectCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Case-insensitive status selection; `"all"` clears it.
    pub fn status(mut self, status: &str) -> Self {
        self.status = (!is_all(status)).then(|| status.trim().to_lowercase());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = (!is_all(location)).then(|| location.trim().to_string());
        self
    }

    pub fn roi(mut self, band: RoiBand) -> Self {
        self.roi = band;
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    /// Parse raw selections. Fails only on an unknown ROI band.
    pub fn from_params(params: &CriteriaParams) -> Result<Self> {
        let mut criteria = ProjectCriteria::new();
        if let Some(term) = &params.search {
            criteria = criteria.search(term.as_str());
        }
        if let Some(status) = &params.status {
            criteria = criteria.status(status);
        }
        if let Some(location) = &params.location {
            criteria = criteria.location(location);
        }
        if let Some(roi) = &params.roi {
            criteria = criteria.roi(roi.parse()?);
        }
        if let Some(sort) = &params.sort {
            criteria = criteria.sort_by(SortKey::from(sort.as_str()));
        }
        Ok(criteria)
    }

    /// `true` when no filter is active (sorting aside).
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.status.is_none()
            && self.location.is_none()
            && self.roi == RoiBand::All
    }
}

/// Lower-cased view of the criteria, prepared once per call.
struct Matcher {
    search: String,
    status: Option<String>,
    roi: RoiBand,
}

impl Matcher {
    fn new(criteria: &ProjectCriteria) -> Self {
        Self {
            search: criteria.search_term.to_lowercase(),
            status: criteria.status.as_ref().map(|s| s.to_lowercase()),
            roi: criteria.roi,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        self.matches_search(project)
            && self.matches_status(project)
            && self.roi.contains(parse_roi(&project.roi))
    }

    fn matches_search(&self, project: &Project) -> bool {
        self.search.is_empty()
            || project.title.to_lowercase().contains(&self.search)
            || project.description.to_lowercase().contains(&self.search)
    }

    fn matches_status(&self, project: &Project) -> bool {
        match &self.status {
            None => true,
            Some(wanted) => project.status.as_str().to_lowercase() == *wanted,
        }
    }
}

// ---------------------------------------------------------------------------
// filter_and_sort
// ---------------------------------------------------------------------------

/// Filter then sort, returning owned copies of the visible projects.
pub fn filter_and_sort(projects: &[Project], criteria: &ProjectCriteria) -> Vec<Project> {
    filter_and_sort_refs(projects, criteria)
        .into_iter()
        .cloned()
        .collect()
}

/// Filter then sort without cloning.
///
/// ROI sorts place projects with an unparseable ROI after all others, in
/// input order. Funding sorts use [`Project::funding_ratio`], which is `+inf`
/// for a zero target: first under `funding-high`, last under `funding-low`.
pub fn filter_and_sort_refs<'a>(
    projects: &'a [Project],
    criteria: &ProjectCriteria,
) -> Vec<&'a Project> {
    let matcher = Matcher::new(criteria);
    let visible = projects.iter().filter(|p| matcher.matches(p));

    match criteria.sort_by {
        SortKey::Newest => visible.collect(),
        SortKey::RoiHigh | SortKey::RoiLow => {
            let descending = criteria.sort_by == SortKey::RoiHigh;
            let mut keyed: Vec<(Option<f64>, &Project)> =
                visible.map(|p| (p.roi_value(), p)).collect();
            keyed.sort_by(|(a, _), (b, _)| compare_roi(*a, *b, descending));
            keyed.into_iter().map(|(_, p)| p).collect()
        }
        SortKey::FundingHigh | SortKey::FundingLow => {
            let descending = criteria.sort_by == SortKey::FundingHigh;
            let mut keyed: Vec<(f64, &Project)> =
                visible.map(|p| (p.funding_ratio(), p)).collect();
            keyed.sort_by(|(a, _), (b, _)| {
                if descending {
                    b.total_cmp(a)
                } else {
                    a.total_cmp(b)
                }
            });
            keyed.into_iter().map(|(_, p)| p).collect()
        }
    }
}

fn compare_roi(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.total_cmp(&a),
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
