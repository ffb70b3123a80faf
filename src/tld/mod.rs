//! Where the list of TLDs to check comes from.
//!
//! Either the user names the TLDs on the command line, or the full list of
//! delegated TLDs is fetched from the IANA registry feed.

pub mod registry;

pub use registry::{fetch_tld_list, parse_tld_list, registry_client};

use crate::domain::validate_tlds;
use crate::error::Result;
use crate::types::CheckConfig;

/// Source of the TLD sequence for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TldSource {
    /// TLDs supplied by the user, in the order given
    Explicit(Vec<String>),
    /// Fetch the registry feed at this URL
    Registry { url: String },
}

impl TldSource {
    /// Pick the source from the optional command-line argument.
    ///
    /// A supplied argument must pass TLD-list validation.
    pub fn from_arg(arg: Option<&str>, config: &CheckConfig) -> Result<Self> {
        match arg {
            Some(arg) => {
                validate_tlds(arg)?;
                Ok(Self::Explicit(split_tld_arg(arg)))
            }
            None => Ok(Self::Registry {
                url: config.registry_url.clone(),
            }),
        }
    }

    /// Produce the ordered TLD sequence
    pub async fn resolve(&self, config: &CheckConfig) -> Result<Vec<String>> {
        match self {
            Self::Explicit(tlds) => Ok(tlds.clone()),
            Self::Registry { url } => {
                let client = registry_client(config)?;
                fetch_tld_list(&client, url).await
            }
        }
    }
}

/// Split a validated comma-separated argument. Order and duplicates are kept.
pub fn split_tld_arg(arg: &str) -> Vec<String> {
    arg.split(',').map(str::to_string).collect()
}
