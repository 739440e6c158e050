// ── Domain <-> wire conversions ──
//
// One payload builder serves create, create-in-team, and update; update
// only backfills the name from tracked state. The read direction collapses
// build settings without a repo path into "no repo".

use netsite_api::{RepoInfo, RepoSetup, Site, SiteSetup};

use crate::error::CoreError;
use crate::model::{RepoConfig, SiteAttributes, SiteId, SiteState};

/// Empty strings from the API mean "unset".
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

// ── Outbound ───────────────────────────────────────────────────────

/// Build the setup payload sent on create and update.
///
/// `repo` is only set when the declared attributes carry a repo block;
/// `installation_id` is never forwarded.
pub fn build_setup(declared: &SiteAttributes) -> SiteSetup {
    SiteSetup {
        name: declared.name.clone().unwrap_or_default(),
        custom_domain: declared.custom_domain.clone().unwrap_or_default(),
        repo: declared.repo.as_ref().map(repo_setup),
    }
}

/// Build the payload sent on update.
///
/// An undeclared name keeps the one the server currently holds, so a
/// server-assigned name survives later updates.
pub fn build_update_setup(declared: &SiteAttributes, current: Option<&SiteState>) -> SiteSetup {
    let mut setup = build_setup(declared);
    if let Some(state) = current.filter(|_| setup.name.is_empty()) {
        setup.name.clone_from(&state.name);
    }
    setup
}

fn repo_setup(repo: &RepoConfig) -> RepoSetup {
    RepoSetup {
        cmd: repo.command.clone().unwrap_or_default(),
        deploy_key_id: repo.deploy_key_id.clone().unwrap_or_default(),
        dir: repo.dir.clone().unwrap_or_default(),
        provider: repo.provider.clone(),
        repo_path: repo.repo_path.clone(),
        repo_branch: repo.repo_branch.clone(),
    }
}

// ── Inbound ────────────────────────────────────────────────────────

/// Translate remote build settings into a repo block.
///
/// Missing settings and settings with an empty `repo_path` both mean the
/// site has no linked repository.
pub fn repo_from_build_settings(settings: Option<RepoInfo>) -> Option<RepoConfig> {
    let info = settings?;
    if info.repo_path.is_empty() {
        return None;
    }

    Some(RepoConfig {
        command: non_empty(info.cmd),
        deploy_key_id: non_empty(info.deploy_key_id),
        dir: non_empty(info.dir),
        provider: info.provider,
        repo_path: info.repo_path,
        repo_branch: info.repo_branch,
        installation_id: info.installation_id,
    })
}

/// Map a fetched site to tracked state.
pub fn site_state(site: Site) -> Result<SiteState, CoreError> {
    Ok(SiteState {
        id: SiteId::try_from(site.id)?,
        name: site.name,
        custom_domain: site.custom_domain,
        deploy_url: site.deploy_url,
        account_slug: site.account_slug,
        account_name: site.account_name,
        repo: repo_from_build_settings(site.build_settings),
    })
}
