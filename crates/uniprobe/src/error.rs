//! CLI error types with miette diagnostics.
//!
//! Maps `CheckError` variants into user-facing errors with actionable help
//! text and distinct exit codes, so a wrapping scheduler can tell failure
//! kinds apart without parsing stderr.

use miette::Diagnostic;
use thiserror::Error;

use uniprobe_core::CheckError;

/// Exit codes reported to the wrapping scheduler.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not connect to the controller")]
    #[diagnostic(
        code(uniprobe::connection_failed),
        help(
            "Check that the controller is running and reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { reason: String },

    #[error("authentication failed")]
    #[diagnostic(
        code(uniprobe::auth_failed),
        help(
            "Verify the configured username and password.\n\
             Reason: {message}"
        )
    )]
    AuthFailed { message: String },

    #[error("device '{identifier}' not found")]
    #[diagnostic(
        code(uniprobe::not_found),
        help("Check the configured MAC address and site.")
    )]
    NotFound { identifier: String },

    #[error("configuration error: {message}")]
    #[diagnostic(code(uniprobe::config))]
    Config { message: String },

    #[error("API error: {message}")]
    #[diagnostic(code(uniprobe::api_error))]
    Api { message: String },

    #[error(transparent)]
    #[diagnostic(code(uniprobe::config))]
    ConfigLoad(Box<figment::Error>),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Config { .. } | Self::ConfigLoad(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CheckError → CliError mapping ────────────────────────────────────

impl From<CheckError> for CliError {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::Config { message } => Self::Config { message },
            CheckError::Authentication { message } => Self::AuthFailed { message },
            CheckError::Connection { reason } => Self::ConnectionFailed { reason },
            CheckError::DeviceNotFound { identifier } => Self::NotFound { identifier },
            CheckError::Api { message } => Self::Api { message },
            CheckError::Internal(message) => Self::Api { message },
        }
    }
}
