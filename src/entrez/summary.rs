use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::hit::HitRecord;
use crate::entrez::client::FetchError;

/// Database tag whose accessions are looked up by default
pub const DEFAULT_TAG: &str = "gi";

/// Date format used by esummary (`2010/12/08`)
const ESUMMARY_DATE_FORMAT: &str = "%Y/%m/%d";

/// Document summary of one Entrez record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSummary {
    /// Entrez UID (the GI number for nucleotide and protein records)
    pub uid: String,

    /// Accession without version (e.g. `CP002323`)
    pub caption: String,

    /// Record description
    pub title: String,

    #[serde(rename = "accessionversion")]
    pub accession_version: String,

    #[serde(rename = "createdate")]
    pub create_date: String,

    #[serde(rename = "updatedate")]
    pub update_date: String,

    /// `live`, `suppressed`, `replaced` or `dead`; empty when not reported
    pub status: String,

    /// Accession that supersedes this record, if any
    #[serde(rename = "replacedby")]
    pub replaced_by: String,

    pub organism: String,
}

impl DocumentSummary {
    #[must_use]
    pub fn created(&self) -> Option<NaiveDate> {
        parse_esummary_date(&self.create_date)
    }

    #[must_use]
    pub fn updated(&self) -> Option<NaiveDate> {
        parse_esummary_date(&self.update_date)
    }

    /// Whether the record is still current
    #[must_use]
    pub fn is_live(&self) -> bool {
        if self.status.is_empty() {
            self.replaced_by.is_empty()
        } else {
            self.status.eq_ignore_ascii_case("live")
        }
    }
}

fn parse_esummary_date(s: &str) -> Option<NaiveDate> {
    let date = s.split_whitespace().next()?;
    NaiveDate::parse_from_str(date, ESUMMARY_DATE_FORMAT).ok()
}

/// Collect the accessions carrying `tag` from a set of hits, keeping the
/// first occurrence of each.
#[must_use]
pub fn collect_accessions(hits: &[HitRecord], tag: &str) -> Vec<String> {
    let mut accessions: Vec<String> = Vec::new();

    for id in hits.iter().flat_map(|hit| hit.ids_with_tag(tag)) {
        if !accessions.contains(&id.accession_number) {
            accessions.push(id.accession_number.clone());
        }
    }

    accessions
}

/// Reshape an esummary JSON response (`retmode=json`) into summaries keyed
/// by UID. Entries that NCBI reports as errors are skipped.
///
/// # Errors
///
/// Returns `FetchError::InvalidResponse` if the body is not esummary JSON,
/// or `FetchError::Api` if NCBI reported a request-level error.
pub fn parse_esummary(body: &str) -> Result<HashMap<String, DocumentSummary>, FetchError> {
    let json: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::InvalidResponse(format!("not JSON: {e}")))?;

    if let Some(message) = json.get("error").and_then(|e| e.as_str()) {
        return Err(FetchError::Api(message.to_string()));
    }

    let result = json
        .get("result")
        .ok_or_else(|| FetchError::InvalidResponse("missing 'result' object".to_string()))?;

    let uids = result
        .get("uids")
        .and_then(|u| u.as_array())
        .ok_or_else(|| FetchError::InvalidResponse("missing 'result.uids' list".to_string()))?;

    let mut summaries = HashMap::new();

    for uid in uids.iter().filter_map(|u| u.as_str()) {
        let Some(entry) = result.get(uid) else {
            warn!("esummary listed uid {uid} without a document");
            continue;
        };

        if let Some(message) = entry.get("error").and_then(|e| e.as_str()) {
            warn!("esummary error for uid {uid}: {message}");
            continue;
        }

        let mut summary: DocumentSummary = serde_json::from_value(entry.clone())
            .map_err(|e| FetchError::InvalidResponse(format!("document {uid}: {e}")))?;
        if summary.uid.is_empty() {
            summary.uid = uid.to_string();
        }

        summaries.insert(uid.to_string(), summary);
    }

    Ok(summaries)
}
