// Controller platform detection.
//
// The two deployment variants expose the same network API under different
// path prefixes. A HEAD probe against the controller root tells them apart:
// integrated-OS appliances answer 200, standalone controllers redirect to
// their management UI.

use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::transport::TransportConfig;

/// The deployment variant of a UniFi controller.
///
/// Determines the site API prefix and the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    /// Standalone Network Application -- no proxy prefix.
    Standard,
    /// Integrated-OS appliance (UDM and friends) -- `/proxy/network/` prefix.
    IntegratedOs,
}

impl ControllerKind {
    /// The login endpoint path.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Standard => "/api/login",
            Self::IntegratedOs => "/api/auth/login",
        }
    }

    /// The prefix for site-scoped API endpoints (`{prefix}/{site}/...`).
    pub fn site_prefix(self) -> &'static str {
        match self {
            Self::Standard => "/api/s",
            Self::IntegratedOs => "/proxy/network/api/s",
        }
    }
}

/// Detect the controller kind by probing the bare controller root.
///
/// `HEAD {base}/` -- 200 means integrated OS, 302 means a standalone
/// controller redirecting to its UI. Anything else (unexpected status,
/// connect failure, timeout) degrades to [`ControllerKind::Standard`] with
/// a warning so the caller can still attempt a login.
pub async fn detect_kind(base_url: &Url, transport: &TransportConfig) -> ControllerKind {
    let http = match transport.build_client() {
        Ok(http) => http,
        Err(err) => {
            warn!(error = %err, "could not build probe client, assuming standard controller");
            return ControllerKind::Standard;
        }
    };

    match http.head(base_url.clone()).send().await {
        Ok(resp) => match resp.status() {
            StatusCode::OK => {
                debug!("detected integrated-OS controller");
                ControllerKind::IntegratedOs
            }
            StatusCode::FOUND => {
                debug!("detected standard controller");
                ControllerKind::Standard
            }
            status => {
                warn!(%status, "unexpected probe response, assuming standard controller");
                ControllerKind::Standard
            }
        },
        Err(err) => {
            warn!(error = %err, "controller probe failed, assuming standard controller");
            ControllerKind::Standard
        }
    }
}
