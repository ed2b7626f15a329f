// Shared transport configuration for building reqwest::Client instances.
//
// The detector, the authenticator, and the per-session client all share
// TLS, timeout, and cookie settings through this module.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::redirect;

use crate::error::Error;

/// Shared transport configuration for building HTTP clients.
///
/// TLS verification is an explicit per-controller choice; most controllers
/// ship self-signed certificates, so `verify_tls = false` is common but
/// never assumed.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub verify_tls: bool,
    pub timeout: Duration,
    pub cookie_jar: Option<Arc<Jar>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout: Duration::from_secs(30),
            cookie_jar: None,
        }
    }
}

impl TransportConfig {
    pub fn new(verify_tls: bool, timeout: Duration) -> Self {
        Self {
            verify_tls,
            timeout,
            cookie_jar: None,
        }
    }

    /// Create a config with a fresh cookie jar (for session auth).
    pub fn with_cookie_jar(mut self) -> Self {
        self.cookie_jar = Some(Arc::new(Jar::default()));
        self
    }

    /// Build a `reqwest::Client` from this config.
    ///
    /// Redirects are never followed: platform detection relies on observing
    /// the raw 302 from the controller root.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(redirect::Policy::none())
            .user_agent(concat!("uniprobe/", env!("CARGO_PKG_VERSION")));

        if !self.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref jar) = self.cookie_jar {
            builder = builder.cookie_provider(Arc::clone(jar));
        }

        builder.build().map_err(Error::Transport)
    }
}
