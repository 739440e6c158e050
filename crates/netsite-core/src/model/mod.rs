// ── Domain model ──
//
// Canonical types the reconciler works in. Wire types from `netsite-api`
// are translated at the boundary in `convert`.

pub mod site;
pub mod site_id;
pub mod tracked;

pub use site::{RepoConfig, SiteAttributes, SiteState};
pub use site_id::SiteId;
pub use tracked::TrackedSite;
