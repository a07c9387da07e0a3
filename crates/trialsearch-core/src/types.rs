//! Wire types for the search backend.
//!
//! Field names mirror the backend's snake_case JSON. Everything except
//! `nct_id` is optional; indexed trial data is frequently partial and the
//! client must render whatever arrives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The backend's structured reading of a free-text query.
///
/// Keys are free-form (`condition`, `phase`, `city`, ...); a `None` value
/// means "not detected" and is filtered out before display.
pub type Interpretation = BTreeMap<String, Option<String>>;

/// Success body of `GET /search`.
///
/// Extra top-level fields (the backend also sends `total`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub trials: Vec<TrialRecord>,
    pub interpretation: Interpretation,
}

/// One clinical-trial entry returned by the backend. Read-only to the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialRecord {
    /// Unique trial identifier. Opaque, non-empty, used as the stable render key.
    pub nct_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_title: Option<String>,
    /// Free-form status token. `"RECRUITING"` gets distinct visual treatment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsors: Option<Vec<Sponsor>>,
}

/// Conditions arrive either as a single string or as a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Conditions {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub lead_or_collaborator: String,
}

impl Sponsor {
    /// Returns true if this entry is the designated lead sponsor.
    pub fn is_lead(&self) -> bool {
        self.lead_or_collaborator == "lead"
    }
}
