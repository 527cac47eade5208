use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the HackFest registration desk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HackFestConfig {
    /// Registration backend settings
    pub api: ApiConfig,
    /// Payment gateway handoff settings
    pub payment: PaymentConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the external registration service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Gateway base, without the hosted-page slug
    pub gateway_base: String,
    /// Hosted-page slug for individual registrations
    pub individual_slug: String,
    /// Hosted-page slug for team registrations
    pub team_slug: String,
    /// Registration fee for individuals, in INR
    pub individual_amount: f64,
    /// Registration fee for teams, in INR
    pub team_amount: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for HackFestConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.hackfest2026.in/api".to_string(),
                timeout_seconds: 30,
            },
            payment: PaymentConfig {
                gateway_base: "https://smartpay.easebuzz.in/142077".to_string(),
                individual_slug: "Indi_HackFest2026".to_string(),
                team_slug: "Team_HackFest2026".to_string(),
                individual_amount: 199.0,
                team_amount: 499.0,
            },
            observability: ObservabilityConfig {
                tracing_enabled: false,
                log_level: "info".to_string(),
            },
        }
    }
}

impl HackFestConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (hackfest.toml)
    /// 3. Environment variables (prefixed with HACKFEST__)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&HackFestConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("hackfest.toml").exists() {
            builder = builder.add_source(File::with_name("hackfest"));
        }

        builder = builder.add_source(
            Environment::with_prefix("HACKFEST")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut desk_config: HackFestConfig = config.try_deserialize()?;

        // The deployment base URL is the one thing most often overridden,
        // so honor the plain variable name too.
        if let Ok(base_url) = std::env::var("HACKFEST_API_BASE_URL") {
            desk_config.api.base_url = base_url;
        }

        Ok(desk_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    /// Fee for the given participation type, in INR.
    pub fn fee(&self, participation_type: crate::wizard::ParticipationType) -> f64 {
        match participation_type {
            crate::wizard::ParticipationType::Individual => self.payment.individual_amount,
            crate::wizard::ParticipationType::Team => self.payment.team_amount,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        HackFestConfig::default().payment
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<HackFestConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = HackFestConfig::load_env_file();
        HackFestConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static HackFestConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::ParticipationType;

    #[test]
    fn test_defaults_point_at_the_production_gateway() {
        let config = HackFestConfig::default();
        assert_eq!(
            config.payment.gateway_base,
            "https://smartpay.easebuzz.in/142077"
        );
        assert_eq!(config.payment.individual_slug, "Indi_HackFest2026");
        assert_eq!(config.payment.team_slug, "Team_HackFest2026");
    }

    #[test]
    fn test_fee_follows_participation_type() {
        let config = HackFestConfig::default();
        assert_eq!(
            config.fee(ParticipationType::Individual),
            config.payment.individual_amount
        );
        assert_eq!(
            config.fee(ParticipationType::Team),
            config.payment.team_amount
        );
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = HackFestConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: HackFestConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.payment.team_amount, config.payment.team_amount);
    }
}
