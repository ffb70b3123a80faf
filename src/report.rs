//! Plain-text report written while the check runs

use crate::error::Result;
use crate::types::Report;
use std::io::Write;

const SEPARATOR: &str = "-------------------------------------";

/// Writes the human-readable report to stdout (or any writer)
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, domain: &str, tld_count: usize) -> Result<()> {
        writeln!(
            self.out,
            "Checking availability for domain '{}' with {} TLDs",
            domain, tld_count
        )?;
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "Available domains:")?;
        Ok(())
    }

    /// Streamed as soon as a name is found to be free
    pub fn available(&mut self, domain: &str, tld: &str) -> Result<()> {
        writeln!(self.out, "\t{}.{} is available.", domain, tld)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn lookup_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn summary(&mut self, report: &Report) -> Result<()> {
        if report.registered.is_empty() {
            writeln!(self.out, "No domain is registered.")?;
        } else {
            writeln!(self.out, "{}", SEPARATOR)?;
            writeln!(self.out, "Registered domains:")?;
            for tld in &report.registered {
                writeln!(self.out, "\t{}.{} is registered.", report.domain, tld)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
