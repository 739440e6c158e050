//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use netsite_config::ConfigError;
use netsite_core::{ApiError, CoreError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const RATE_LIMITED: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API")]
    #[diagnostic(
        code(netsite::connection_failed),
        help("Check network access and the profile's api_url (or --api-url).")
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(netsite::tls_error),
        help("Check the ca_cert path configured for this profile.")
    )]
    Tls { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(netsite::timeout),
        help("Increase the timeout with --timeout or the profile's timeout key.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(netsite::auth_failed),
        help(
            "The access token was rejected. Create a new personal access token\n\
             and store it with: netsite config set-token"
        )
    )]
    AuthFailed,

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(netsite::no_credentials),
        help(
            "Configure a token with: netsite config init\n\
             Or set the NETSITE_AUTH_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Sites ────────────────────────────────────────────────────────
    #[error("Site '{id}' not found")]
    #[diagnostic(
        code(netsite::not_found),
        help("Check the site ID in the Netlify UI under Site configuration.")
    )]
    NotFound { id: String },

    #[error("No site is tracked in {}", .path.display())]
    #[diagnostic(
        code(netsite::not_tracked),
        help("Run: netsite site create --file <FILE>, or netsite site import <ID>")
    )]
    NotTracked { path: PathBuf },

    #[error("{} already tracks site '{id}'", .path.display())]
    #[diagnostic(
        code(netsite::already_tracked),
        help("Use another --state file, or run: netsite site update")
    )]
    AlreadyTracked { id: String, path: PathBuf },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Rate limited by the API")]
    #[diagnostic(
        code(netsite::rate_limited),
        help("Retry after {retry_after_secs}s.")
    )]
    RateLimited { retry_after_secs: u64 },

    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(netsite::api_error))]
    ApiError { status: u16, message: String },

    #[error("Unexpected API response: {message}")]
    #[diagnostic(code(netsite::bad_response))]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(netsite::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(netsite::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: netsite config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(netsite::config))]
    Config(Box<ConfigError>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(netsite::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    #[diagnostic(code(netsite::json), help("Check the file contents and try again."))]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    #[diagnostic(code(netsite::toml), help("Check the file contents and try again."))]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(netsite::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::AuthFailed | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::NotTracked { .. } => exit_code::NOT_FOUND,
            Self::AlreadyTracked { .. } => exit_code::CONFLICT,
            Self::Timeout => exit_code::TIMEOUT,
            Self::RateLimited { .. } => exit_code::RATE_LIMITED,
            Self::Validation { .. }
            | Self::ProfileNotFound { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── ApiError → CliError mapping ──────────────────────────────────────

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        match err {
            ApiError::InvalidToken => Self::AuthFailed,
            ApiError::Authentication { message } => Self::Validation {
                field: "token".into(),
                reason: message,
            },
            ApiError::Tls(message) => Self::Tls { message },
            ApiError::InvalidUrl(e) => Self::Validation {
                field: "api_url".into(),
                reason: e.to_string(),
            },
            ApiError::RateLimited { retry_after_secs } => Self::RateLimited { retry_after_secs },
            ApiError::Api {
                status, message, ..
            } => Self::ApiError { status, message },
            ApiError::Transport(e) => match e.status() {
                Some(status) => Self::ApiError {
                    status: status.as_u16(),
                    message: e.to_string(),
                },
                None => Self::ConnectionFailed {
                    source: Box::new(e),
                },
            },
            ApiError::Deserialization { message, .. } => Self::BadResponse { message },
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Api(e) => e.into(),
            CoreError::InvalidSiteId { reason } => Self::Validation {
                field: "site ID".into(),
                reason,
            },
            CoreError::MissingId { operation } => Self::Validation {
                field: "state".into(),
                reason: format!("'{operation}' needs a tracked site ID"),
            },
            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::ProfileNotFound { name, available } => {
                Self::ProfileNotFound { name, available }
            }
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Core(e) => e.into(),
            other => Self::Config(Box::new(other)),
        }
    }
}
