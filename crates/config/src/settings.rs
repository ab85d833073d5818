//! Configuration settings structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configurable_value::ConfigurableValue;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub site: SiteSettings,
	pub auth: AuthSettings,
	pub storage: StorageSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Site the mock pretends to be
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SiteSettings {
	pub site_id: String,
	pub currency: String,
	pub locale: String,
}

/// Token endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AuthSettings {
	/// Client id the token endpoint accepts; empty accepts any
	pub client_id: String,
	/// Optional client secret checked for client_credentials grants
	pub client_secret: Option<ConfigurableValue>,
	pub token_ttl_secs: u64,
}

/// Storage configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageSettings {
	/// Basket lifetime in seconds; zero disables expiry
	pub basket_ttl_secs: i64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Errors raised by settings validation
#[derive(Error, Debug)]
pub enum ConfigValidationError {
	#[error("Invalid currency code: {currency} (expected 3 letters)")]
	InvalidCurrency { currency: String },

	#[error("Token TTL must be positive")]
	ZeroTokenTtl,

	#[error("Basket TTL must not be negative: {value}")]
	NegativeBasketTtl { value: i64 },
}

impl Settings {
	/// Address the server binds to, in host:port form
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check cross-field constraints the type system cannot
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let currency = &self.site.currency;
		if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
			return Err(ConfigValidationError::InvalidCurrency {
				currency: currency.clone(),
			});
		}
		if self.auth.token_ttl_secs == 0 {
			return Err(ConfigValidationError::ZeroTokenTtl);
		}
		if self.storage.basket_ttl_secs < 0 {
			return Err(ConfigValidationError::NegativeBasketTtl {
				value: self.storage.basket_ttl_secs,
			});
		}
		Ok(())
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			site: SiteSettings::default(),
			auth: AuthSettings::default(),
			storage: StorageSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 8080,
		}
	}
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			site_id: "shopmark".to_string(),
			currency: "USD".to_string(),
			locale: "en-US".to_string(),
		}
	}
}

impl Default for AuthSettings {
	fn default() -> Self {
		Self {
			client_id: String::new(),
			client_secret: None,
			token_ttl_secs: 1800,
		}
	}
}

impl Default for StorageSettings {
	fn default() -> Self {
		Self {
			basket_ttl_secs: 24 * 60 * 60,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}
