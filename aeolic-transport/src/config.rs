//! Connection settings for [`crate::UreqTransport`].

use std::time::Duration;

use aeolic_core::TransportSettings;

/// Tuning passed to the production transport at construction.
///
/// | Field                           | Default          |
/// |---------------------------------|------------------|
/// | `timeout` (whole request)       | 15s              |
/// | `connect_timeout`               | 15s              |
/// | `max_idle_connections`          | 10               |
/// | `max_idle_connections_per_host` | 10               |
/// | `user_agent`                    | `aeolic/<ver>`   |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_idle_connections: usize,
    pub max_idle_connections_per_host: usize,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(15),
            max_idle_connections: 10,
            max_idle_connections_per_host: 10,
            user_agent: concat!("aeolic/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl From<&TransportSettings> for TransportConfig {
    fn from(s: &TransportSettings) -> Self {
        Self {
            timeout: Duration::from_secs(s.timeout_secs),
            connect_timeout: Duration::from_secs(s.connect_timeout_secs),
            max_idle_connections: s.max_idle_connections,
            max_idle_connections_per_host: s.max_idle_connections,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_settings_defaults() {
        let from_settings = TransportConfig::from(&TransportSettings::default());
        assert_eq!(from_settings, TransportConfig::default());
    }

    #[test]
    fn settings_override_timeouts() {
        let settings = TransportSettings {
            timeout_secs: 2,
            connect_timeout_secs: 1,
            max_idle_connections: 4,
        };
        let config = TransportConfig::from(&settings);
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.max_idle_connections_per_host, 4);
        assert!(config.user_agent.starts_with("aeolic/"));
    }
}
