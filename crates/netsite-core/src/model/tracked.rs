// ── Tracked resource record ──
//
// What an orchestrator keeps between invocations for one site: the
// declared attributes, the remote ID once assigned, and the last state
// read back. The reconciler mutates it in place.

use serde::{Deserialize, Serialize};

use super::site::{SiteAttributes, SiteState};
use super::site_id::SiteId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSite {
    /// Remote primary key. `None` before create and after delete, or once
    /// a read finds the site gone.
    #[serde(default)]
    pub id: Option<SiteId>,
    /// Desired configuration.
    #[serde(default)]
    pub declared: SiteAttributes,
    /// Last state read from the API.
    #[serde(default)]
    pub state: Option<SiteState>,
}

impl TrackedSite {
    /// A not-yet-created site with the given declared attributes.
    pub fn new(declared: SiteAttributes) -> Self {
        Self {
            id: None,
            declared,
            state: None,
        }
    }

    /// A site known only by ID, as during import.
    pub fn from_id(id: SiteId) -> Self {
        Self {
            id: Some(id),
            declared: SiteAttributes::default(),
            state: None,
        }
    }

    /// Whether this record points at a remote site.
    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    /// Store a fresh read result.
    pub(crate) fn record(&mut self, state: SiteState) {
        self.id = Some(state.id.clone());
        self.state = Some(state);
    }

    /// Forget the remote site (deleted, or gone out of band).
    pub fn clear(&mut self) {
        self.id = None;
        self.state = None;
    }
}
