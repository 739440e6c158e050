//! Site resource reconciler between declared configuration and the
//! Netlify API.
//!
//! - **[`reconciler`]**: The lifecycle verbs: [`create`](reconciler::create),
//!   [`read`](reconciler::read), [`update`](reconciler::update),
//!   [`delete`](reconciler::delete), and [`import`](reconciler::import). Each
//!   takes the API client as an explicit argument and mutates a
//!   [`TrackedSite`] in place.
//!
//! - **[`SiteApi`]**: The five remote operations the reconciler relies on,
//!   implemented for [`netsite_api::NetlifyClient`].
//!
//! - **Domain model** ([`model`]): [`SiteAttributes`] (declared),
//!   [`SiteState`] (read back), and [`RepoConfig`], which is either wholly
//!   present or absent.
//!
//! - **[`ClientConfig`]**: Endpoint, token, and transport settings used to
//!   build an authenticated client.

pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod reconciler;

// ── Primary re-exports ──────────────────────────────────────────────
pub use api::SiteApi;
pub use config::{ClientConfig, TlsVerification};
pub use error::CoreError;
pub use model::{RepoConfig, SiteAttributes, SiteId, SiteState, TrackedSite};

pub use netsite_api::{Error as ApiError, NetlifyClient};
