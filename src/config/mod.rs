use clap::Parser;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "glumi-tracker")]
#[command(about = "Counts gLumi mentions in a public account's content")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub listen_addr: String,

    /// Base URL the profile page is fetched from; points at a mock server
    /// in tests.
    #[arg(long, default_value = "https://twitter.com")]
    pub profile_base_url: String,

    #[arg(long, default_value = "10")]
    pub fetch_timeout_secs: u64,

    #[arg(long, default_value = "./static")]
    pub static_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for ServerConfig {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn profile_base_url(&self) -> &str {
        &self.profile_base_url
    }

    fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    fn static_dir(&self) -> &str {
        &self.static_dir
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("listen_addr", &self.listen_addr)?;
        validate_url("profile_base_url", &self.profile_base_url)?;
        validate_positive_number("fetch_timeout_secs", self.fetch_timeout_secs as usize, 1)?;
        validate_non_empty_string("static_dir", &self.static_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = ServerConfig::parse_from(["glumi-tracker"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn rejects_invalid_profile_base_url() {
        let config =
            ServerConfig::parse_from(["glumi-tracker", "--profile-base-url", "ftp://example.com"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_fetch_timeout() {
        let config = ServerConfig::parse_from(["glumi-tracker", "--fetch-timeout-secs", "0"]);
        assert!(config.validate().is_err());
    }
}
