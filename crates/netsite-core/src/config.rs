// ── Runtime client configuration ──
//
// Describes *how* to reach the API: endpoint, token, TLS, timeout.
// Never touches disk; `netsite-config` builds one from a profile.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use netsite_api::transport::{TlsMode, TransportConfig};
use netsite_api::{DEFAULT_API_URL, NetlifyClient};

use crate::error::CoreError;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store.
    #[default]
    SystemDefaults,
    /// Trust an extra CA certificate file (self-hosted API gateways).
    CustomCa(PathBuf),
}

/// Everything needed to build an authenticated API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., `https://api.netlify.com/api/v1/`).
    pub api_url: Url,
    /// Personal access token.
    pub token: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for the public API endpoint with default transport settings.
    pub fn new(token: SecretString) -> Result<Self, CoreError> {
        let api_url = DEFAULT_API_URL.parse().map_err(|e| CoreError::Config {
            message: format!("invalid default API URL: {e}"),
        })?;

        Ok(Self {
            api_url,
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Build the HTTP client this config describes.
    pub fn connect(&self) -> Result<NetlifyClient, CoreError> {
        let transport = TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            },
            timeout: self.timeout,
        };

        Ok(NetlifyClient::from_token(
            self.api_url.as_str(),
            &self.token,
            &transport,
        )?)
    }
}
