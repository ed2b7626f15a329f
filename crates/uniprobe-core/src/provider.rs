// ── Session provider ──
//
// The unit every check calls to obtain an authenticated session. Orchestrates
// cache lookup, on-miss detection + login, and cache population. Concurrent
// misses for the same key may each log in (no single-flight); every resulting
// session independently satisfies the cache contract and the last write wins.

use std::time::Duration;

use secrecy::ExposeSecret;
use tracing::{debug, warn};

use uniprobe_api::{ControllerKind, Session, detect_kind, login};

use crate::cache::TtlCache;
use crate::config::{CheckConfig, Credentials};
use crate::error::CheckError;
use crate::outcome::SkipReason;

/// How long an established session stays reusable.
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(3600);

/// Cache identity for one controller connection. Distinct credentials for
/// the same host are distinct sessions. The key never leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConnectionKey {
    controller: String,
    port: u16,
    verify_tls: bool,
    username: String,
    password: String,
}

impl ConnectionKey {
    fn new(config: &CheckConfig, credentials: &Credentials) -> Self {
        Self {
            controller: config.controller.clone().unwrap_or_default(),
            port: config.port,
            verify_tls: config.verify_tls,
            username: credentials.username.clone().unwrap_or_default(),
            password: credentials
                .password
                .as_ref()
                .map(|p| p.expose_secret().to_owned())
                .unwrap_or_default(),
        }
    }
}

/// A session plus the controller kind it was established against.
#[derive(Debug, Clone)]
pub struct CachedSession {
    pub session: Session,
    pub kind: ControllerKind,
}

/// Result of a session lookup.
#[derive(Debug)]
pub enum SessionState {
    /// An authenticated session, fresh or reused.
    Ready(CachedSession),
    /// The asset is not ready to be polled; withdraw the check silently.
    Unconfigured(SkipReason),
}

/// Process-wide provider of authenticated controller sessions.
///
/// One instance is shared across all in-flight polls; the inner cache
/// tolerates concurrent access without cross-poll locking.
#[derive(Debug, Default)]
pub struct SessionProvider {
    cache: TtlCache<ConnectionKey, CachedSession>,
}

impl SessionProvider {
    pub fn new() -> Self {
        Self {
            cache: TtlCache::new(),
        }
    }

    /// Obtain a session for the asset, reusing a cached one when present.
    ///
    /// The hit path is side-effect-free. On miss: a missing controller
    /// address is a configuration error, missing credentials withdraw the
    /// check, and otherwise the provider detects the controller kind,
    /// logs in, and caches the pair for [`SESSION_MAX_AGE`].
    pub async fn get_session(
        &self,
        config: &CheckConfig,
        credentials: &Credentials,
    ) -> Result<SessionState, CheckError> {
        let key = ConnectionKey::new(config, credentials);

        if let Some(cached) = self.cache.get(&key) {
            debug!(controller = %key.controller, "session cache hit");
            return Ok(SessionState::Ready(cached));
        }

        // Miss path: validate before touching the network.
        let base_url = config.base_url()?;

        let username = credentials.username.as_deref().filter(|u| !u.is_empty());
        let password = credentials
            .password
            .as_ref()
            .filter(|p| !p.expose_secret().is_empty());
        let (Some(username), Some(password)) = (username, password) else {
            warn!(controller = %key.controller, "credentials not configured, withdrawing check");
            return Ok(SessionState::Unconfigured(SkipReason::CredentialsMissing));
        };

        let transport = config.transport();
        let kind = detect_kind(&base_url, &transport).await;
        let session = login(kind, &base_url, &transport, username, password).await?;

        debug!(
            controller = %key.controller,
            ?kind,
            created_at = %session.created_at(),
            "session established"
        );

        let cached = CachedSession { session, kind };
        self.cache.set(key, cached.clone(), SESSION_MAX_AGE);
        Ok(SessionState::Ready(cached))
    }
}
