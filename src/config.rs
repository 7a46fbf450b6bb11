use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Circuit Analysis Test Backend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port the chat frontend connects to.
pub const DEFAULT_PORT: u16 = 8000;

/// Environment overrides
pub const ENV_HOST: &str = "CIRCUIT_MOCK_HOST";
pub const ENV_PORT: &str = "CIRCUIT_MOCK_PORT";
pub const ENV_DATA_DIR: &str = "CIRCUIT_MOCK_DATA_DIR";
pub const ENV_BASE_URL: &str = "CIRCUIT_MOCK_BASE_URL";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "circuit_mock_lib=info,circuit_mock=info,tower_http=info"
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind. All interfaces by default (development only).
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding `files/` and `sessions/`.
    pub data_dir: PathBuf,
    /// Prefix used when building links to generated files.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
            base_url: format!("http://localhost:{DEFAULT_PORT}"),
        }
    }
}

impl ServerConfig {
    /// Build the config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to the default and log a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HOST) {
            match raw.trim().parse::<IpAddr>() {
                Ok(host) => config.host = host,
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {ENV_HOST}"),
            }
        }

        let mut port_overridden = false;
        if let Some(raw) = lookup(ENV_PORT) {
            match raw.trim().parse::<u16>() {
                Ok(port) => {
                    config.port = port;
                    port_overridden = true;
                }
                Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {ENV_PORT}"),
            }
        }

        if let Some(raw) = lookup(ENV_DATA_DIR) {
            if !raw.trim().is_empty() {
                config.data_dir = PathBuf::from(raw.trim());
            }
        }

        match lookup(ENV_BASE_URL) {
            Some(raw) if !raw.trim().is_empty() => {
                config.base_url = raw.trim().trim_end_matches('/').to_string();
            }
            _ if port_overridden => {
                config.base_url = format!("http://localhost:{}", config.port);
            }
            _ => {}
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_frontend_expectations() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn port_override_updates_base_url() {
        let config = ServerConfig::from_lookup(lookup_from(&[(ENV_PORT, "9100")]));
        assert_eq!(config.port, 9100);
        assert_eq!(config.base_url, "http://localhost:9100");
    }

    #[test]
    fn explicit_base_url_wins_and_is_trimmed() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_PORT, "9100"),
            (ENV_BASE_URL, "https://mock.example.test/"),
        ]));
        assert_eq!(config.base_url, "https://mock.example.test");
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_PORT, "not-a-port"),
            (ENV_HOST, "nowhere"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn data_dir_and_host_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/circuit"),
            (ENV_HOST, "127.0.0.1"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/circuit"));
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
