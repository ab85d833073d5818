//! Config values that resolve from the environment at startup
//!
//! Secret-ish settings (the token client secret) should not live in the
//! config file; they are declared as env references and resolved once.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A setting that is either inline or resolved from an env variable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ConfigurableValue {
	Plain { value: String },
	Env { var: String },
}

#[derive(Error, Debug)]
pub enum ConfigurableValueError {
	#[error("Environment variable not set: {var}")]
	EnvVarMissing { var: String },

	#[error("Environment variable {var} is empty")]
	EnvVarEmpty { var: String },
}

impl ConfigurableValue {
	pub fn from_plain(value: impl Into<String>) -> Self {
		Self::Plain {
			value: value.into(),
		}
	}

	pub fn from_env(var: impl Into<String>) -> Self {
		Self::Env { var: var.into() }
	}

	/// Resolve to the concrete string, reading the environment if needed
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self {
			Self::Plain { value } => Ok(value.clone()),
			Self::Env { var } => {
				let value = std::env::var(var).map_err(|_| {
					ConfigurableValueError::EnvVarMissing { var: var.clone() }
				})?;
				if value.is_empty() {
					return Err(ConfigurableValueError::EnvVarEmpty { var: var.clone() });
				}
				Ok(value)
			},
		}
	}
}
