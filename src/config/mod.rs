use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

/// Command-line configuration for the single-shot probe binary.
///
/// The load harness binary has its own command line (host, user count, hatch
/// rate, run time) and does not read any of this.
#[derive(Debug, Clone, Parser)]
#[command(name = "search-probe")]
#[command(about = "Fire a handful of product searches and print their summaries")]
pub struct ProbeConfig {
    /// Base URL of the search service under test.
    #[arg(long, default_value = "http://localhost:8080")]
    pub host: String,

    /// Number of search requests to issue before exiting.
    #[arg(long, default_value = "10")]
    pub requests: usize,

    /// Skip the service banner check before issuing searches.
    #[arg(long)]
    pub no_health_check: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("host", &self.host)?;
        validate_positive_number("requests", self.requests, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProbeConfig::parse_from(["search-probe"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.host, "http://localhost:8080");
        assert_eq!(config.requests, 10);
    }

    #[test]
    fn test_zero_requests_fails_validation() {
        let config = ProbeConfig::parse_from(["search-probe", "--requests", "0"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_host_fails_validation() {
        let config = ProbeConfig::parse_from(["search-probe", "--host", "localhost:8080"]);
        assert!(config.validate().is_err());
    }
}
