//! API configuration

use serde::Deserialize;

use core_kernel::temporal::Timezone;
use domain_billing::BillingPolicy;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Secret for signing session tokens
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub jwt_expiration_secs: u64,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// IANA timezone the hostel's "day" is anchored to
    #[serde(default)]
    pub timezone: Timezone,
    /// Charge accommodation on top of food. Off by default: the hostel
    /// currently bills food only.
    #[serde(default)]
    pub bill_accommodation: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 24 * 60 * 60,
            database_url: "postgres://localhost/hostel".to_string(),
            log_level: "info".to_string(),
            timezone: Timezone::default(),
            bill_accommodation: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The billing policy the calculator runs under
    pub fn billing_policy(&self) -> BillingPolicy {
        BillingPolicy {
            include_accommodation: self.bill_accommodation,
        }
    }
}
