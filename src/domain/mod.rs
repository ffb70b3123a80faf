//! Domain validation and availability checking

pub mod checker;
pub mod validator;

// Re-export main functionality
pub use checker::{AvailabilityChecker, SystemNsLookup};
pub use validator::{is_valid_domain, is_valid_tlds, validate_domain, validate_tlds};

use async_trait::async_trait;

/// Why an NS lookup did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The name does not exist (or has no NS records)
    NotFound,
    /// Anything else: timeouts, refused queries, malformed responses
    Other(String),
}

impl LookupFailure {
    /// Classify a resolver message that carries no structured kind.
    ///
    /// Compatibility shim for resolvers that only report text: a message
    /// naming a missing host is treated as not-found.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("no such host") || lower.contains("nxdomain") {
            Self::NotFound
        } else {
            Self::Other(message)
        }
    }
}

/// Trait for issuing NS lookups
#[async_trait]
pub trait NameServerLookup: Send + Sync {
    /// Look up the NS records of a fully-qualified name
    async fn lookup_ns(&self, name: &str) -> std::result::Result<(), LookupFailure>;
}
