// ── Per-check connection configuration ──
//
// These types describe *how* to reach a controller for one asset. They are
// consumed, not owned, by the core: the CLI (or whatever harness embeds the
// checks) builds them from its own configuration surface -- core never reads
// config files.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use uniprobe_api::TransportConfig;

use crate::error::CheckError;

/// Connection and scoping options for one monitored asset.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Controller address: a bare host (HTTPS on `port` is assumed) or a
    /// full URL. Required; its absence is a configuration error.
    pub controller: Option<String>,
    /// Controller port, used when `controller` is a bare host.
    pub port: u16,
    /// TLS certificate verification. Explicit, never inferred.
    pub verify_tls: bool,
    /// Site to scope requests to.
    pub site: String,
    /// Device MAC address, required for per-device checks.
    pub mac: Option<String>,
    /// Timeout applied to every request of the poll.
    pub timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            controller: None,
            port: 443,
            verify_tls: true,
            site: "default".into(),
            mac: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl CheckConfig {
    /// Resolve the controller base URL.
    ///
    /// A missing or unparseable address is a configuration error -- surfaced
    /// hard, never skipped.
    pub fn base_url(&self) -> Result<Url, CheckError> {
        let Some(controller) = self.controller.as_deref().filter(|c| !c.is_empty()) else {
            return Err(CheckError::Config {
                message: "missing controller address".into(),
            });
        };

        let raw = if controller.contains("://") {
            controller.to_owned()
        } else {
            format!("https://{}:{}/", controller, self.port)
        };

        raw.parse().map_err(|e| CheckError::Config {
            message: format!("invalid controller address `{controller}`: {e}"),
        })
    }

    /// Transport settings for this asset's requests.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::new(self.verify_tls, self.timeout)
    }
}

/// Login credentials for one asset. Either field may be unset while the
/// operator has not finished configuring the asset.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn bare_host_becomes_https_url() {
        let config = CheckConfig {
            controller: Some("unifi.example.net".into()),
            port: 8443,
            ..CheckConfig::default()
        };
        let url = config.base_url().unwrap();
        assert_eq!(url.as_str(), "https://unifi.example.net:8443/");
    }

    #[test]
    fn full_url_is_taken_verbatim() {
        let config = CheckConfig {
            controller: Some("http://127.0.0.1:8080".into()),
            ..CheckConfig::default()
        };
        let url = config.base_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn missing_controller_is_a_config_error() {
        let config = CheckConfig::default();
        let err = config.base_url().unwrap_err();
        assert!(matches!(err, CheckError::Config { .. }), "got: {err:?}");
    }
}
