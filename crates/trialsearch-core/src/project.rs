//! Result projection rules.
//!
//! Pure derivation from raw trial records (and the query interpretation)
//! to the normalized fields the display needs. Recomputed on every render
//! pass; nothing here caches or mutates the record.
//!
//! Fallback chains are explicit and ordered:
//! - title: `brief_title` → `official_title` → placeholder
//! - lead sponsor: entry marked `lead` → first entry → `"N/A"`

use crate::types::{Conditions, Interpretation, TrialRecord};

/// Shown when a record has neither a brief nor an official title.
pub const UNTITLED_PLACEHOLDER: &str = "Untitled trial";

/// Placeholder for absent phase and sponsor fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// Fixed message shown instead of the count and list while a search is in flight.
pub const LOADING_MESSAGE: &str = "Analyzing data...";

/// The single status value with distinct visual treatment (exact match).
const RECRUITING_STATUS: &str = "RECRUITING";

/// Conditions beyond this count are elided with `"..."`.
const MAX_CONDITIONS_SHOWN: usize = 3;

/// Normalized display fields for one trial record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialCard<'a> {
    pub nct_id: &'a str,
    pub title: &'a str,
    pub phase: &'a str,
    pub status: Option<&'a str>,
    /// True only for an exact `"RECRUITING"` status.
    pub recruiting: bool,
    pub conditions: Option<String>,
    pub lead_sponsor: &'a str,
    /// Number of sponsor entries besides the displayed one (0 or 1 sponsor → 0).
    pub extra_sponsors: usize,
}

/// Projects one raw record into its display fields.
pub fn project(record: &TrialRecord) -> TrialCard<'_> {
    let (lead_sponsor, extra_sponsors) = lead_sponsor(record);
    TrialCard {
        nct_id: &record.nct_id,
        title: display_title(record),
        phase: phase_tag(record),
        status: record.overall_status.as_deref(),
        recruiting: is_recruiting(record),
        conditions: conditions_line(record),
        lead_sponsor,
        extra_sponsors,
    }
}

/// Title fallback chain. Never returns an empty string.
pub fn display_title(record: &TrialRecord) -> &str {
    non_empty(record.brief_title.as_deref())
        .or_else(|| non_empty(record.official_title.as_deref()))
        .unwrap_or(UNTITLED_PLACEHOLDER)
}

/// Resolves the lead sponsor name and the count of remaining entries.
///
/// The first entry marked `lead` wins; otherwise the first entry; `"N/A"`
/// when there are no sponsors at all.
pub fn lead_sponsor(record: &TrialRecord) -> (&str, usize) {
    let Some(sponsors) = record.sponsors.as_deref().filter(|s| !s.is_empty()) else {
        return (NOT_AVAILABLE, 0);
    };
    let lead = sponsors
        .iter()
        .find(|sponsor| sponsor.is_lead())
        .unwrap_or(&sponsors[0]);
    (lead.name.as_str(), sponsors.len() - 1)
}

/// Joins up to the first three conditions, eliding the rest.
///
/// A single-string value is displayed verbatim; absent conditions display
/// nothing.
pub fn conditions_line(record: &TrialRecord) -> Option<String> {
    match record.conditions.as_ref()? {
        Conditions::One(condition) => Some(condition.clone()),
        Conditions::Many(list) => {
            let mut line = list
                .iter()
                .take(MAX_CONDITIONS_SHOWN)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if list.len() > MAX_CONDITIONS_SHOWN {
                line.push_str("...");
            }
            Some(line)
        }
    }
}

/// True only for an exact, case-sensitive `"RECRUITING"` status.
pub fn is_recruiting(record: &TrialRecord) -> bool {
    record.overall_status.as_deref() == Some(RECRUITING_STATUS)
}

pub fn phase_tag(record: &TrialRecord) -> &str {
    non_empty(record.phase.as_deref()).unwrap_or(NOT_AVAILABLE)
}

/// Filters the interpretation down to the chips worth rendering.
///
/// A chip renders only when the value is present and non-empty; null or
/// empty values are omitted entirely. This is a filter, not a transform.
pub fn interpretation_chips(interpretation: &Interpretation) -> Vec<(&str, &str)> {
    interpretation
        .iter()
        .filter_map(|(key, value)| {
            let value = non_empty(value.as_deref())?;
            Some((key.as_str(), value))
        })
        .collect()
}

/// Pluralized result count, e.g. `"1 trial"` / `"5 trials"`.
pub fn result_count(count: usize) -> String {
    if count == 1 {
        "1 trial".to_string()
    } else {
        format!("{count} trials")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
