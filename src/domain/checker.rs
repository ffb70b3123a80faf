//! Domain availability checker

use crate::domain::{LookupFailure, NameServerLookup};
use crate::error::Result;
use crate::report::Reporter;
use crate::types::{LookupOutcome, Report, TldCheck};
use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use std::io::Write;
use std::time::Instant;

/// NS lookups through the host's resolver configuration
pub struct SystemNsLookup {
    resolver: TokioAsyncResolver,
}

impl SystemNsLookup {
    /// Build a resolver from `/etc/resolv.conf` (or the platform equivalent).
    ///
    /// Falls back to hickory's default configuration when the system one
    /// cannot be read.
    pub fn from_system_conf() -> Self {
        let (config, opts) = read_system_conf().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not read system resolver configuration, using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        });
        Self::with_config(config, opts)
    }

    pub fn with_config(config: ResolverConfig, mut opts: ResolverOpts) -> Self {
        // one query per name, no resolver-level retry
        opts.attempts = 1;

        tracing::debug!(
            nameservers = config.name_servers().len(),
            timeout_ms = %opts.timeout.as_millis(),
            "Resolver configured"
        );

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

#[async_trait]
impl NameServerLookup for SystemNsLookup {
    async fn lookup_ns(&self, name: &str) -> std::result::Result<(), LookupFailure> {
        self.resolver
            .ns_lookup(name)
            .await
            .map(|_| ())
            .map_err(|e| classify_resolve_error(&e))
    }
}

/// Map a resolver error onto a lookup failure.
///
/// hickory reports NXDOMAIN, an empty NODATA answer and server-side failures
/// (SERVFAIL, REFUSED, ...) all as `NoRecordsFound`. Only the first two mean
/// the name does not exist. Errors without a response code fall back to
/// message matching.
pub fn classify_resolve_error(err: &ResolveError) -> LookupFailure {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match response_code {
            ResponseCode::NXDomain | ResponseCode::NoError => {
                tracing::trace!(response_code = %response_code, "No NS records");
                LookupFailure::NotFound
            }
            other => LookupFailure::Other(format!("{} (response code: {})", err, other)),
        },
        _ => LookupFailure::from_message(err.to_string()),
    }
}

/// Runs one NS lookup per TLD, strictly in order
pub struct AvailabilityChecker<L = SystemNsLookup> {
    lookup: L,
}

impl AvailabilityChecker<SystemNsLookup> {
    /// Create a checker backed by the system resolver
    pub fn new() -> Self {
        Self::with_lookup(SystemNsLookup::from_system_conf())
    }
}

impl Default for AvailabilityChecker<SystemNsLookup> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: NameServerLookup> AvailabilityChecker<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Check `<domain>.<tld>`
    pub async fn check_tld(&self, domain: &str, tld: &str) -> TldCheck {
        let fqdn = format!("{}.{}", domain, tld);
        let start_time = Instant::now();

        let outcome = match self.lookup.lookup_ns(&fqdn).await {
            Ok(()) => LookupOutcome::Registered,
            Err(LookupFailure::NotFound) => LookupOutcome::Available,
            Err(LookupFailure::Other(message)) => LookupOutcome::Unknown { message },
        };

        tracing::debug!(
            fqdn = %fqdn,
            outcome = %outcome,
            duration_ms = %start_time.elapsed().as_millis(),
            "NS lookup completed"
        );

        TldCheck {
            tld: tld.to_string(),
            fqdn,
            outcome,
        }
    }

    /// Check every TLD and report as results come in.
    ///
    /// Available names and lookup errors are written as soon as they are
    /// known; registered names are written in the summary after the loop.
    /// Only a failed write to the reporter aborts the run.
    pub async fn run<W: Write>(
        &self,
        domain: &str,
        tlds: &[String],
        reporter: &mut Reporter<W>,
    ) -> Result<Report> {
        let batch_start = Instant::now();
        let mut report = Report::new(domain);

        reporter.header(domain, tlds.len())?;

        for tld in tlds {
            let check = self.check_tld(domain, tld).await;
            match &check.outcome {
                LookupOutcome::Available => reporter.available(domain, tld)?,
                LookupOutcome::Registered => {}
                LookupOutcome::Unknown { message } => {
                    tracing::debug!(fqdn = %check.fqdn, error = %message, "NS lookup failed");
                    reporter.lookup_error(message)?;
                }
            }
            report.record(&check);
        }

        reporter.summary(&report)?;

        tracing::info!(
            domain = %domain,
            tlds = %report.total(),
            available = %report.available.len(),
            registered = %report.registered.len(),
            unknown = %report.unknown.len(),
            duration_ms = %batch_start.elapsed().as_millis(),
            "Availability check completed"
        );

        Ok(report)
    }
}
