// ── Site resource reconciler ──
//
// The four lifecycle verbs plus import. Each verb makes one remote call;
// create and update follow it with a read so the tracked state reflects
// what the server actually stored. Nothing is retried or cached.

use tracing::{debug, info, warn};

use crate::api::SiteApi;
use crate::convert::{build_setup, build_update_setup, site_state};
use crate::error::CoreError;
use crate::model::{SiteId, SiteState, TrackedSite};

/// Fetch a site by ID.
///
/// Returns `Ok(None)` when the API reports the site as not found; every
/// other failure is returned as an error.
pub async fn fetch<C: SiteApi>(client: &C, id: &SiteId) -> Result<Option<SiteState>, CoreError> {
    match client.get_site(id.as_str()).await {
        Ok(site) => site_state(site).map(Some),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Create the declared site and read it back.
///
/// A non-empty `account_slug` routes creation through the team endpoint;
/// otherwise the default endpoint is used. Exactly one of them is called.
/// The new ID is recorded before the follow-up read, so a failing read
/// still leaves the record pointing at the created site. If the read finds
/// nothing, the record is cleared like any other read.
pub async fn create<C: SiteApi>(client: &C, tracked: &mut TrackedSite) -> Result<(), CoreError> {
    let setup = build_setup(&tracked.declared);

    let site = match tracked.declared.team_slug() {
        Some(slug) => {
            debug!(account_slug = slug, "using team-scoped create");
            client.create_site_in_team(slug, &setup).await?
        }
        None => client.create_site(&setup).await?,
    };

    let id = SiteId::try_from(site.id)?;
    info!(site_id = %id, "site created");
    tracked.id = Some(id.clone());

    refresh(client, tracked, &id).await
}

/// Refresh tracked state from the API.
///
/// If the site no longer exists remotely, the record is cleared and no
/// error is returned.
pub async fn read<C: SiteApi>(client: &C, tracked: &mut TrackedSite) -> Result<(), CoreError> {
    let id = tracked
        .id
        .clone()
        .ok_or(CoreError::MissingId { operation: "read" })?;

    refresh(client, tracked, &id).await
}

/// Push the declared attributes to an existing site and read it back.
///
/// Without a declared name, the tracked name is sent so the server keeps it.
pub async fn update<C: SiteApi>(client: &C, tracked: &mut TrackedSite) -> Result<(), CoreError> {
    let id = tracked
        .id
        .clone()
        .ok_or(CoreError::MissingId { operation: "update" })?;

    let setup = build_update_setup(&tracked.declared, tracked.state.as_ref());
    client.update_site(id.as_str(), &setup).await?;
    info!(site_id = %id, "site updated");

    refresh(client, tracked, &id).await
}

/// Delete the site and clear the record.
///
/// On failure the record is left untouched.
pub async fn delete<C: SiteApi>(client: &C, tracked: &mut TrackedSite) -> Result<(), CoreError> {
    let id = tracked
        .id
        .clone()
        .ok_or(CoreError::MissingId { operation: "delete" })?;

    client.delete_site(id.as_str()).await?;
    info!(site_id = %id, "site deleted");
    tracked.clear();
    Ok(())
}

/// Adopt an existing site given only its ID.
///
/// Returns `None` if no such site exists. The declared attributes of the
/// returned record are derived from the fetched state.
pub async fn import<C: SiteApi>(client: &C, id: SiteId) -> Result<Option<TrackedSite>, CoreError> {
    let Some(state) = fetch(client, &id).await? else {
        return Ok(None);
    };

    info!(site_id = %id, "site imported");
    let mut tracked = TrackedSite::new(state.to_attributes());
    tracked.record(state);
    Ok(Some(tracked))
}

/// Shared read step behind `read`, `create`, and `update`.
async fn refresh<C: SiteApi>(
    client: &C,
    tracked: &mut TrackedSite,
    id: &SiteId,
) -> Result<(), CoreError> {
    if let Some(state) = fetch(client, id).await? {
        tracked.record(state);
    } else {
        warn!(site_id = %id, "site no longer exists remotely, clearing tracked state");
        tracked.clear();
    }
    Ok(())
}
