//! Domain name and TLD argument validation

use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Dot-separated labels of letters, digits and inner hyphens. No TLD expected.
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9])$",
    )
    .expect("domain pattern must compile")
});

/// Comma-separated alphanumeric tokens, no empty entries.
static TLD_LIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]+,)*[a-zA-Z0-9]+$").expect("TLD list pattern must compile")
});

pub const INVALID_DOMAIN_MESSAGE: &str = "Error: Invalid domain name.";
pub const INVALID_TLDS_MESSAGE: &str =
    "Error: Invalid TLD argument. Please provide a comma-separated list of TLDs";

/// Check the domain label syntax.
///
/// Label length limits (63 per label, 253 overall) are not enforced.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_PATTERN.is_match(domain)
}

/// Check that the argument is a comma-separated list of alphanumeric TLDs.
pub fn is_valid_tlds(tlds: &str) -> bool {
    TLD_LIST_PATTERN.is_match(tlds)
}

pub fn validate_domain(domain: &str) -> Result<()> {
    if is_valid_domain(domain) {
        Ok(())
    } else {
        tracing::debug!(domain = %domain, "Rejected domain argument");
        Err(crate::validation_error!(INVALID_DOMAIN_MESSAGE))
    }
}

pub fn validate_tlds(tlds: &str) -> Result<()> {
    if is_valid_tlds(tlds) {
        Ok(())
    } else {
        tracing::debug!(tlds = %tlds, "Rejected TLD argument");
        Err(crate::validation_error!(INVALID_TLDS_MESSAGE))
    }
}
