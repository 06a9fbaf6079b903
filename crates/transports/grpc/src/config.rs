//! Environment-driven service configuration
//!
//! No config file, no persisted state: everything is an environment
//! variable with a default, read once at startup.

use std::time::Duration;

/// Default bind address; the port is the one the original wire protocol
/// used.
const DEFAULT_BIND_ADDRESS: &str = "[::1]:6556";

/// Default deadline for a parked StartExchange call (seconds).
const DEFAULT_EXCHANGE_TIMEOUT_SECS: u64 = 300;

/// Default deadline for a parked WaitForOffer call (seconds).
const DEFAULT_OFFER_WAIT_TIMEOUT_SECS: u64 = 60;

/// Signaling service configuration
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// Server bind address, e.g. `[::1]:6556` or `0.0.0.0:6556`
    pub bind_address: String,

    /// How long a StartExchange caller may stay parked before the slot is
    /// released back to idle and the caller gets DEADLINE_EXCEEDED
    pub exchange_timeout: Duration,

    /// How long a WaitForOffer caller may stay parked waiting for an
    /// offer to be published
    pub offer_wait_timeout: Duration,

    /// Emit JSON structured logs instead of human-readable output
    pub json_logging: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            exchange_timeout: Duration::from_secs(DEFAULT_EXCHANGE_TIMEOUT_SECS),
            offer_wait_timeout: Duration::from_secs(DEFAULT_OFFER_WAIT_TIMEOUT_SECS),
            json_logging: false,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// - `RENDEZVOUS_BIND_ADDRESS`
    /// - `RENDEZVOUS_EXCHANGE_TIMEOUT_SEC`
    /// - `RENDEZVOUS_OFFER_WAIT_TIMEOUT_SEC`
    /// - `RENDEZVOUS_JSON_LOGGING`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_address: std::env::var("RENDEZVOUS_BIND_ADDRESS")
                .unwrap_or(defaults.bind_address),
            exchange_timeout: Duration::from_secs(env_u64(
                "RENDEZVOUS_EXCHANGE_TIMEOUT_SEC",
                DEFAULT_EXCHANGE_TIMEOUT_SECS,
            )),
            offer_wait_timeout: Duration::from_secs(env_u64(
                "RENDEZVOUS_OFFER_WAIT_TIMEOUT_SEC",
                DEFAULT_OFFER_WAIT_TIMEOUT_SECS,
            )),
            json_logging: env_bool("RENDEZVOUS_JSON_LOGGING", defaults.json_logging),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_protocol_port() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_address, "[::1]:6556");
        assert_eq!(config.exchange_timeout, Duration::from_secs(300));
        assert_eq!(config.offer_wait_timeout, Duration::from_secs(60));
        assert!(!config.json_logging);
    }

    #[test]
    fn unparseable_env_values_fall_back_to_defaults() {
        assert_eq!(env_u64("RENDEZVOUS_TEST_UNSET_KEY", 42), 42);
        assert!(env_bool("RENDEZVOUS_TEST_UNSET_KEY", true));
    }
}
