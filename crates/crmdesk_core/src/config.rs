//! Runtime configuration for a `Crm` instance.
//!
//! # Invariants
//! - `log_level` is always one of the normalized level names.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use crate::store::latency::LatencyProfile;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable read by binaries to pick a latency profile.
pub const LATENCY_ENV_VAR: &str = "CRMDESK_LATENCY";

#[derive(Debug, Clone, PartialEq)]
pub struct CrmConfig {
    /// Delays for contact, deal, and activity stores.
    pub latency: LatencyProfile,
    /// Delays for the company store.
    pub company_latency: LatencyProfile,
    pub log_level: &'static str,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::realistic(),
            company_latency: LatencyProfile::realistic_company(),
            log_level: default_log_level(),
        }
    }
}

impl CrmConfig {
    /// Zero latency everywhere.
    pub fn for_tests() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            company_latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    /// Builds a config from a `CRMDESK_LATENCY` value.
    ///
    /// Accepts `off`, `realistic`, or a non-negative scale factor such as
    /// `0.25`. A missing value means `realistic`.
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Ok(Self::default());
        };
        match raw.to_ascii_lowercase().as_str() {
            "off" | "none" | "0" => Ok(Self::for_tests()),
            "realistic" | "on" => Ok(Self::default()),
            other => {
                let factor: f64 = other
                    .parse()
                    .map_err(|_| ConfigError::InvalidLatency(raw.to_string()))?;
                if !factor.is_finite() || factor < 0.0 {
                    return Err(ConfigError::InvalidLatency(raw.to_string()));
                }
                let defaults = Self::default();
                match (
                    defaults.latency.checked_scaled(factor),
                    defaults.company_latency.checked_scaled(factor),
                ) {
                    (Some(latency), Some(company_latency)) => Ok(Self {
                        latency,
                        company_latency,
                        ..defaults
                    }),
                    _ => Err(ConfigError::InvalidLatency(raw.to_string())),
                }
            }
        }
    }

    /// Scales both profiles; see [`LatencyProfile::scaled`] for clamping.
    pub fn with_latency_scale(self, factor: f64) -> Self {
        Self {
            latency: self.latency.scaled(factor),
            company_latency: self.company_latency.scaled(factor),
            ..self
        }
    }

    pub fn with_log_level(self, level: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            log_level: normalize_level(level)?,
            ..self
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLatency(String),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatency(value) => write!(
                f,
                "invalid {LATENCY_ENV_VAR} value `{value}`; expected off|realistic|<factor>"
            ),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::InvalidLatency(_) => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}
