// ── Site domain types ──

use serde::{Deserialize, Serialize};

use super::site_id::SiteId;

/// User-authored configuration for a site.
///
/// Every field is optional: a bare `SiteAttributes::default()` asks the
/// API for a site with a generated name under the default account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteAttributes {
    /// Site name. Absent or empty means "let the server pick one".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    /// Team to create the site in. Only consulted by create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoConfig>,
}

impl SiteAttributes {
    /// The team slug to scope creation to, if one is set and non-empty.
    pub fn team_slug(&self) -> Option<&str> {
        self.account_slug.as_deref().filter(|slug| !slug.is_empty())
    }
}

/// A linked source repository. Either the whole block is present or the
/// site has no repository; there is no half-configured state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoConfig {
    /// Build command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_key_id: Option<String>,
    /// Publish directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    /// Git provider, e.g. `github` or `gitlab`.
    pub provider: String,
    /// `owner/name` path on the provider.
    pub repo_path: String,
    pub repo_branch: String,
    /// Server-assigned. Read back from the API, never sent to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<i64>,
}

/// Last-known remote state of a site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    pub id: SiteId,
    pub name: String,
    pub custom_domain: String,
    pub deploy_url: String,
    pub account_slug: String,
    pub account_name: String,
    pub repo: Option<RepoConfig>,
}

impl SiteState {
    /// Declared attributes that reproduce this state.
    ///
    /// Used after import, where the only input was an ID.
    pub fn to_attributes(&self) -> SiteAttributes {
        fn non_empty(s: &str) -> Option<String> {
            (!s.is_empty()).then(|| s.to_owned())
        }

        SiteAttributes {
            name: non_empty(&self.name),
            custom_domain: non_empty(&self.custom_domain),
            account_slug: non_empty(&self.account_slug),
            repo: self.repo.clone(),
        }
    }
}
