//! Server configuration from the environment.

use std::net::SocketAddr;

use crate::planner::LogHeader;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TRIP_SERVER_ADDR";

/// Environment variable holding the carrier name printed on log sheets.
pub const CARRIER_VAR: &str = "TRIP_CARRIER";

/// Environment variable holding the truck number printed on log sheets.
pub const TRUCK_NUMBER_VAR: &str = "TRIP_TRUCK_NUMBER";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Header printed on every daily log sheet.
    pub log_header: LogHeader,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            log_header: LogHeader::new("Spotter Logistics Inc.", "TRK-1042"),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Unset or empty variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ADDR_VAR) {
            config.addr = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: ADDR_VAR,
                value,
            })?;
        }
        if let Some(carrier) = get(CARRIER_VAR) {
            config.log_header.carrier = carrier;
        }
        if let Some(truck) = get(TRUCK_NUMBER_VAR) {
            config.log_header.truck_number = truck;
        }

        Ok(config)
    }
}
