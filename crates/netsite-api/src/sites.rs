// Site endpoints
//
// Creation is either account-default (`/sites`) or team-scoped
// (`/{account_slug}/sites`); every other call is keyed by site ID.

use tracing::debug;

use crate::client::NetlifyClient;
use crate::error::Error;
use crate::models::{Site, SiteSetup};

impl NetlifyClient {
    /// Create a site under the token owner's default account.
    ///
    /// `POST /sites`
    pub async fn create_site(&self, setup: &SiteSetup) -> Result<Site, Error> {
        let url = self.endpoint(&["sites"])?;
        debug!(name = %setup.name, "creating site");
        self.post(url, setup).await
    }

    /// Create a site inside the named team.
    ///
    /// `POST /{account_slug}/sites`
    pub async fn create_site_in_team(
        &self,
        account_slug: &str,
        setup: &SiteSetup,
    ) -> Result<Site, Error> {
        let url = self.endpoint(&[account_slug, "sites"])?;
        debug!(account_slug, name = %setup.name, "creating site in team");
        self.post(url, setup).await
    }

    /// Fetch a single site.
    ///
    /// `GET /sites/{site_id}`
    pub async fn get_site(&self, site_id: &str) -> Result<Site, Error> {
        let url = self.endpoint(&["sites", site_id])?;
        self.get(url).await
    }

    /// Apply a setup payload to an existing site.
    ///
    /// `PATCH /sites/{site_id}`
    pub async fn update_site(&self, site_id: &str, setup: &SiteSetup) -> Result<Site, Error> {
        let url = self.endpoint(&["sites", site_id])?;
        debug!(site_id, "updating site");
        self.patch(url, setup).await
    }

    /// Delete a site.
    ///
    /// `DELETE /sites/{site_id}`
    pub async fn delete_site(&self, site_id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["sites", site_id])?;
        debug!(site_id, "deleting site");
        self.delete(url).await
    }
}
