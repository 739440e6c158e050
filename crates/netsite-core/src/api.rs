// ── Remote API seam ──
//
// The five remote operations the reconciler needs. `NetlifyClient`
// implements them over HTTP; tests substitute an in-memory double.

use async_trait::async_trait;

use netsite_api::{Error, NetlifyClient, Site, SiteSetup};

/// Typed access to the site endpoints.
///
/// Each call carries its own authentication through the implementor
/// (for `NetlifyClient`, the bearer token baked into its HTTP client).
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// `POST /sites`
    async fn create_site(&self, setup: &SiteSetup) -> Result<Site, Error>;

    /// `POST /{account_slug}/sites`
    async fn create_site_in_team(
        &self,
        account_slug: &str,
        setup: &SiteSetup,
    ) -> Result<Site, Error>;

    /// `GET /sites/{site_id}`; a missing site is an error with
    /// `is_not_found() == true`.
    async fn get_site(&self, site_id: &str) -> Result<Site, Error>;

    /// `PATCH /sites/{site_id}`
    async fn update_site(&self, site_id: &str, setup: &SiteSetup) -> Result<Site, Error>;

    /// `DELETE /sites/{site_id}`
    async fn delete_site(&self, site_id: &str) -> Result<(), Error>;
}

#[async_trait]
impl SiteApi for NetlifyClient {
    async fn create_site(&self, setup: &SiteSetup) -> Result<Site, Error> {
        NetlifyClient::create_site(self, setup).await
    }

    async fn create_site_in_team(
        &self,
        account_slug: &str,
        setup: &SiteSetup,
    ) -> Result<Site, Error> {
        NetlifyClient::create_site_in_team(self, account_slug, setup).await
    }

    async fn get_site(&self, site_id: &str) -> Result<Site, Error> {
        NetlifyClient::get_site(self, site_id).await
    }

    async fn update_site(&self, site_id: &str, setup: &SiteSetup) -> Result<Site, Error> {
        NetlifyClient::update_site(self, site_id, setup).await
    }

    async fn delete_site(&self, site_id: &str) -> Result<(), Error> {
        NetlifyClient::delete_site(self, site_id).await
    }
}
