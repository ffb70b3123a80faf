//! Core types and structures for tld-sweep

use crate::error::{Result, TldSweepError};
use std::time::Duration;

/// Canonical list of delegated TLDs published by IANA
pub const IANA_TLD_LIST_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Outcome of a single NS lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The lookup reported that the host does not exist
    Available,
    /// The lookup succeeded
    Registered,
    /// The lookup failed for some other reason (timeout, refused, ...)
    Unknown { message: String },
}

impl std::fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupOutcome::Available => write!(f, "available"),
            LookupOutcome::Registered => write!(f, "registered"),
            LookupOutcome::Unknown { .. } => write!(f, "unknown"),
        }
    }
}

/// Result of checking one TLD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldCheck {
    pub tld: String,
    pub fqdn: String,
    pub outcome: LookupOutcome,
}

/// Classification of a whole run, in TLD input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub domain: String,
    pub available: Vec<String>,
    pub registered: Vec<String>,
    pub unknown: Vec<String>,
}

impl Report {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// File a check into its bucket
    pub fn record(&mut self, check: &TldCheck) {
        let bucket = match check.outcome {
            LookupOutcome::Available => &mut self.available,
            LookupOutcome::Registered => &mut self.registered,
            LookupOutcome::Unknown { .. } => &mut self.unknown,
        };
        bucket.push(check.tld.clone());
    }

    /// Number of TLDs that produced an outcome
    pub fn total(&self) -> usize {
        self.available.len() + self.registered.len() + self.unknown.len()
    }
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub registry_url: String,
    /// `None` leaves the HTTP client without a timeout
    pub fetch_timeout: Option<Duration>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            registry_url: IANA_TLD_LIST_URL.to_string(),
            fetch_timeout: None,
        }
    }
}

impl CheckConfig {
    pub const REGISTRY_URL_VAR: &'static str = "TLD_SWEEP_REGISTRY_URL";
    pub const FETCH_TIMEOUT_VAR: &'static str = "TLD_SWEEP_FETCH_TIMEOUT_SECS";

    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(Self::REGISTRY_URL_VAR).filter(|s| !s.trim().is_empty()) {
            config.registry_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(Self::FETCH_TIMEOUT_VAR).filter(|s| !s.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                TldSweepError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    Self::FETCH_TIMEOUT_VAR,
                    raw
                ))
            })?;
            config.fetch_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
