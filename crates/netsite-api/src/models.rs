//! Wire types for the Netlify site endpoints.
//!
//! Field names are snake_case on the wire, matching the struct fields.
//! Inbound string fields tolerate `null` and missing keys (both decode to
//! an empty string); outbound types only carry the fields a client may set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ── Site (inbound) ───────────────────────────────────────────────────

/// Site record -- from `GET /sites/{site_id}` and both create endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deploy_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Repository configuration used for automated builds. Absent (or
    /// `null`) when no repository was ever linked.
    #[serde(default)]
    pub build_settings: Option<RepoInfo>,
}

/// Build settings attached to a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deploy_key_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_branch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dir: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cmd: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repo: bool,
    /// Assigned by the server when the provider app is installed.
    #[serde(default)]
    pub installation_id: Option<i64>,
}

// ── Site setup (outbound) ────────────────────────────────────────────

/// Request body for create, create-in-team, and update.
///
/// `repo` is skipped entirely when `None`, which is not the same request
/// as sending an empty repo object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSetup {
    pub name: String,
    pub custom_domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoSetup>,
}

/// Writable repository fields. The server-owned `installation_id` has no
/// place here and is never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSetup {
    pub cmd: String,
    pub deploy_key_id: String,
    pub dir: String,
    pub provider: String,
    pub repo_path: String,
    pub repo_branch: String,
}
