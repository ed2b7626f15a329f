// Site-scoped HTTP client.
//
// Wraps an authenticated `Session` with controller-specific URL construction
// and envelope unwrapping. All methods return unwrapped `data` payloads --
// the envelope is stripped before the caller sees it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{Envelope, RawDevice, RawSysInfo};
use crate::platform::ControllerKind;
use crate::session::Session;

/// Client for the site-scoped status endpoints of one controller.
///
/// Handles the `{ meta: { rc, msg }, data: [...] }` envelope and the
/// kind-specific path prefix. Site and MAC path segments are
/// percent-encoded.
pub struct SiteClient {
    session: Session,
    kind: ControllerKind,
    site: String,
}

impl SiteClient {
    pub fn new(session: Session, kind: ControllerKind, site: impl Into<String>) -> Self {
        Self {
            session,
            kind,
            site: site.into(),
        }
    }

    /// The site identifier requests are scoped to.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// The controller kind this client was built for.
    pub fn kind(&self) -> ControllerKind {
        self.kind
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the status snapshot for one device.
    ///
    /// `GET {prefix}/{site}/stat/device/{mac}`
    ///
    /// An empty `data` set means the controller does not know the device;
    /// the caller decides how to surface that.
    pub async fn device_snapshot(&self, mac: &str) -> Result<Vec<RawDevice>, Error> {
        let url = self.site_url(&["stat", "device", mac])?;
        debug!(mac, "fetching device snapshot");
        self.get(url).await
    }

    /// Fetch controller-level status for the site.
    ///
    /// `GET {prefix}/{site}/stat/sysinfo`
    pub async fn sysinfo(&self) -> Result<Vec<RawSysInfo>, Error> {
        let url = self.site_url(&["stat", "sysinfo"])?;
        debug!("fetching sysinfo");
        self.get(url).await
    }

    /// Build a site-scoped URL: `{base}{prefix}/{site}/{tail...}`.
    ///
    /// Pushed segments are percent-encoded, so sites and MACs with reserved
    /// characters stay intact.
    fn site_url(&self, tail: &[&str]) -> Result<Url, Error> {
        let mut url = self.session.base_url().clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| Error::Api {
                message: "controller URL cannot be a base".into(),
            })?;
            segments.pop_if_empty();
            segments.extend(self.kind.site_prefix().split('/').filter(|s| !s.is_empty()));
            segments.push(&self.site);
            segments.extend(tail.iter().copied());
        }
        Ok(url)
    }

    /// Send a GET request and unwrap the envelope.
    async fn get<T: DeserializeOwned + Default>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self
            .session
            .http()
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_envelope(resp).await
    }
}

/// Parse the `{ meta, data }` envelope, returning `data` on success or an
/// error when the HTTP status or `meta.rc` reports failure.
async fn parse_envelope<T: DeserializeOwned + Default>(resp: reqwest::Response) -> Result<Vec<T>, Error> {
    let status = resp.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Authentication {
            message: format!("session rejected (HTTP {status})"),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Api {
            message: format!("HTTP {status}: {}", &body[..body.len().min(200)]),
        });
    }

    let body = resp.text().await.map_err(Error::Transport)?;

    let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
        let preview = &body[..body.len().min(200)];
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })?;

    match envelope.meta.rc.as_str() {
        "ok" => Ok(envelope.data),
        _ => Err(Error::Api {
            message: envelope
                .meta
                .msg
                .unwrap_or_else(|| format!("rc={}", envelope.meta.rc)),
        }),
    }
}
