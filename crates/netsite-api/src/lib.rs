// netsite-api: Async Rust client for the Netlify site endpoints

pub mod client;
pub mod error;
pub mod models;
mod sites;
pub mod transport;

pub use client::{DEFAULT_API_URL, NetlifyClient};
pub use error::Error;
pub use models::{RepoInfo, RepoSetup, Site, SiteSetup};
pub use transport::{TlsMode, TransportConfig};
