// ── Check-level error taxonomy ──
//
// Fatal failure kinds for one poll cycle. Consumers never see raw HTTP
// status codes or JSON parse failures; the `From<uniprobe_api::Error>` impl
// translates transport-layer errors into operator-facing variants.
// "Withdrawn" states (unconfigured credentials, placeholder MAC) are not
// errors -- see `outcome::SkipReason`.

use thiserror::Error;

/// Fatal failure of one poll. None of these are retried inside the core;
/// retry policy belongs to the external scheduler.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Broken or missing configuration the operator must fix.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The controller rejected the login or the cached session.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The controller could not be reached at all. Deliberately distinct
    /// from `Authentication` so the operator can tell the two apart.
    #[error("unable to connect: {reason}")]
    Connection { reason: String },

    /// The controller answered but does not know the requested device.
    #[error("device not found: {identifier}")]
    DeviceNotFound { identifier: String },

    /// Error reported by the controller API.
    #[error("API error: {message}")]
    Api { message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<uniprobe_api::Error> for CheckError {
    fn from(err: uniprobe_api::Error) -> Self {
        match err {
            uniprobe_api::Error::Authentication { message } => Self::Authentication { message },
            uniprobe_api::Error::Transport(e) if e.is_connect() || e.is_timeout() => {
                let reason = e.to_string();
                Self::Connection {
                    reason: if reason.is_empty() {
                        "connection error".into()
                    } else {
                        reason
                    },
                }
            }
            uniprobe_api::Error::Transport(e) => Self::Api {
                message: e.to_string(),
            },
            uniprobe_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("invalid URL: {e}"),
            },
            uniprobe_api::Error::Api { message } => Self::Api { message },
            uniprobe_api::Error::Deserialization { message, body: _ } => {
                Self::Internal(format!("deserialization error: {message}"))
            }
        }
    }
}
