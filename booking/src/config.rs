use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// What to do with a slot that falls inside the doctor's working hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityPolicy {
    /// Confirm from working hours alone and skip the backend
    #[default]
    ConfirmLocally,
    /// Always ask the backend once local checks pass
    ConfirmRemotely,
}

impl std::str::FromStr for AvailabilityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "confirm_locally" => Ok(AvailabilityPolicy::ConfirmLocally),
            "remote" | "confirm_remotely" => Ok(AvailabilityPolicy::ConfirmRemotely),
            _ => Err(format!("Unknown availability policy: {}", s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the booking backend (without `/api/v1`)
    pub api_base_url: String,
    pub availability_policy: AvailabilityPolicy,
    /// Unset means the HTTP client's default
    pub request_timeout: Option<Duration>,
    /// Token to start with, skipping login
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            availability_policy: AvailabilityPolicy::default(),
            request_timeout: None,
            token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let availability_policy = match lookup("MEDIBOOK_AVAILABILITY_POLICY") {
            Some(raw) => raw.parse::<AvailabilityPolicy>().map_err(|_| ConfigError::InvalidValue {
                name: "MEDIBOOK_AVAILABILITY_POLICY",
                value: raw,
            })?,
            None => defaults.availability_policy,
        };

        let request_timeout = match lookup("MEDIBOOK_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "MEDIBOOK_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_base_url: lookup("MEDIBOOK_API_URL").unwrap_or(defaults.api_base_url),
            availability_policy,
            request_timeout,
            token: lookup("MEDIBOOK_TOKEN").filter(|t| !t.is_empty()),
        })
    }
}
