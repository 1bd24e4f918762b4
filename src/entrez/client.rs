use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::hit::HitRecord;
use crate::entrez::summary::{collect_accessions, parse_esummary, DocumentSummary};
use crate::utils::validation::{is_plausible_email, MAX_ACCESSIONS_PER_REQUEST};

/// Root of the NCBI E-utilities API
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

pub const DEFAULT_DATABASE: &str = "nucleotide";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("blast-diff/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("NCBI requires a contact email address, got '{0}'")]
    InvalidEmail(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("esummary returned HTTP {0}")]
    Status(u16),

    #[error("esummary request failed: {0}")]
    Api(String),

    #[error("Invalid esummary response: {0}")]
    InvalidResponse(String),
}

/// Settings for talking to NCBI E-utilities
#[derive(Debug, Clone)]
pub struct EntrezConfig {
    /// Contact address NCBI uses to reach callers who exceed usage limits
    pub email: String,

    /// Tool name reported to NCBI
    pub tool: String,

    /// Entrez database (`nucleotide`, `protein`, ...)
    pub database: String,

    /// E-utilities root URL
    pub base_url: String,

    pub timeout_secs: u64,
}

impl EntrezConfig {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}

impl Default for EntrezConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            database: DEFAULT_DATABASE.to_string(),
            base_url: EUTILS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Blocking esummary client
pub struct EntrezClient {
    http: reqwest::blocking::Client,
    config: EntrezConfig,
}

impl EntrezClient {
    /// # Errors
    ///
    /// Returns `FetchError::InvalidEmail` if no usable contact email is
    /// configured, or `FetchError::Http` if the HTTP client cannot be built.
    pub fn new(config: EntrezConfig) -> Result<Self, FetchError> {
        if !is_plausible_email(&config.email) {
            return Err(FetchError::InvalidEmail(config.email));
        }

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch summaries for every accession tagged `tag` in `hits`
    ///
    /// # Errors
    ///
    /// See [`EntrezClient::fetch_summaries`].
    pub fn fetch_for_hits(
        &self,
        hits: &[HitRecord],
        tag: &str,
    ) -> Result<HashMap<String, DocumentSummary>, FetchError> {
        let accessions = collect_accessions(hits, tag);
        self.fetch_summaries(&accessions)
    }

    /// Fetch document summaries, keyed by UID. No request is made for an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` on network failure, `FetchError::Status`
    /// for a non-success response, or a parse error if the body cannot be
    /// reshaped.
    pub fn fetch_summaries(
        &self,
        accessions: &[String],
    ) -> Result<HashMap<String, DocumentSummary>, FetchError> {
        let mut summaries = HashMap::new();

        for batch in accessions.chunks(MAX_ACCESSIONS_PER_REQUEST) {
            summaries.extend(self.fetch_batch(batch)?);
        }

        let missing = accessions
            .iter()
            .filter(|a| !summaries.contains_key(a.as_str()))
            .count();
        if missing > 0 {
            warn!("{missing} of {} accessions had no summary", accessions.len());
        }

        Ok(summaries)
    }

    fn fetch_batch(
        &self,
        batch: &[String],
    ) -> Result<HashMap<String, DocumentSummary>, FetchError> {
        let url = format!("{}/esummary.fcgi", self.config.base_url.trim_end_matches('/'));
        let ids = batch.join(",");

        debug!(
            "Requesting {} summaries from {} ({})",
            batch.len(),
            self.config.database,
            url
        );

        // POST keeps long id lists out of the URL
        let response = self
            .http
            .post(&url)
            .form(&[
                ("db", self.config.database.as_str()),
                ("id", ids.as_str()),
                ("retmode", "json"),
                ("tool", self.config.tool.as_str()),
                ("email", self.config.email.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text()?;
        parse_esummary(&body)
    }
}
