// ── Core error types ──
//
// Errors surfaced by the reconciler. Remote failures are carried through
// untouched in `Api`; a site that vanished remotely is not an error at all
// (the read reports it as absent and the record is cleared).

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote ───────────────────────────────────────────────────────
    /// Any failure from the remote API, propagated unmodified.
    #[error(transparent)]
    Api(#[from] netsite_api::Error),

    // ── Identity ─────────────────────────────────────────────────────
    #[error("Invalid site ID: {reason}")]
    InvalidSiteId { reason: String },

    #[error("Operation '{operation}' needs a site ID, but none is tracked")]
    MissingId { operation: &'static str },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Returns `true` if the remote API reported the site as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_not_found())
    }
}
