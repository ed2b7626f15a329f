// Cookie-based session login.
//
// The login endpoint sets a session cookie in the client's jar; subsequent
// requests reuse it automatically. A `Session` bundles the jar, the client
// built over it, and the controller base URL so it can be cached and shared
// across polls.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::cookie::{CookieStore, Jar};
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::platform::ControllerKind;
use crate::transport::TransportConfig;

/// An authenticated controller session.
///
/// Immutable after creation: the cache replaces a session rather than
/// refreshing it in place. Cloning is cheap -- the inner client and jar are
/// reference-counted.
#[derive(Clone)]
pub struct Session {
    base_url: Url,
    http: reqwest::Client,
    cookie_jar: Arc<Jar>,
    created_at: DateTime<Utc>,
}

impl Session {
    /// The controller base URL this session was established against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The HTTP client carrying the session cookie.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// When this session was established.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The raw `Cookie` header value, if the jar holds one for the base URL.
    pub fn cookie_header(&self) -> Option<String> {
        let cookies = self.cookie_jar.cookies(&self.base_url)?;
        cookies.to_str().ok().map(String::from)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cookie material stays out of debug output.
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Authenticate against the controller with username/password.
///
/// POSTs credentials to the kind-specific login endpoint:
/// - Standard: `POST /api/login`
/// - Integrated OS: `POST /api/auth/login`
///
/// Any 2xx response yields a [`Session`] whose jar carries the controller's
/// session cookie. Non-2xx is an authentication failure; transport errors
/// pass through so the caller can distinguish "unreachable" from "rejected".
/// Never retried here -- retry policy belongs to the scheduler.
pub async fn login(
    kind: ControllerKind,
    base_url: &Url,
    transport: &TransportConfig,
    username: &str,
    password: &SecretString,
) -> Result<Session, Error> {
    let jar = Arc::new(Jar::default());
    let config = TransportConfig {
        cookie_jar: Some(Arc::clone(&jar)),
        ..transport.clone()
    };
    let http = config.build_client()?;

    let url = base_url.join(kind.login_path()).map_err(Error::InvalidUrl)?;
    debug!(%url, "logging in");

    let body = json!({
        "username": username,
        "password": password.expose_secret(),
    });

    let resp = http
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(Error::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Authentication {
            message: format!("login failed (HTTP {status})"),
        });
    }

    debug!("login successful");
    Ok(Session {
        base_url: base_url.clone(),
        http,
        cookie_jar: jar,
        created_at: Utc::now(),
    })
}
