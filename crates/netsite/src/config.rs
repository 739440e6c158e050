//! CLI configuration: thin wrapper around `netsite_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --token, --timeout).

use secrecy::SecretString;

use netsite_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use netsite_config::{Config, Profile, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ClientConfig` from the config file, active profile, and flags.
///
/// Flags win over profile values. A profile named explicitly via
/// `--profile` must exist; otherwise a missing profile falls back to
/// flags and environment alone.
pub fn resolve_client_config(global: &GlobalOpts) -> Result<ClientConfig, CliError> {
    let cfg = load_config()?;
    let profile_name = active_profile_name(global, &cfg);

    let mut profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                available: cfg.available_profiles(),
                name: profile_name,
            });
        }
        None => Profile::default(),
    };

    // 1. API URL (flag > env > profile)
    if let Some(ref url) = global.api_url {
        profile.api_url = Some(url.clone());
    }

    // 2. Timeout (flag > profile > defaults)
    profile.timeout = global
        .timeout
        .or(profile.timeout)
        .or(Some(cfg.defaults.timeout));

    // 3. Token (flag > token_env > keyring > plaintext)
    let token = match global.token {
        Some(ref token) => SecretString::from(token.clone()),
        None => netsite_config::resolve_token(&profile, &profile_name)?,
    };

    tracing::debug!(profile = %profile_name, "resolved client configuration");
    Ok(netsite_config::client_config(&profile, token)?)
}
