//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::domain::session::DemoCredentials;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// Base URL of the remote procurement API.
    pub api_url: String,
    /// Outbound request timeout; unset means requests may wait indefinitely.
    #[serde(default)]
    pub api_timeout_secs: Option<u64>,
    pub demo_email: String,
    pub demo_password: String,
}

impl ServerConfig {
    pub fn demo_credentials(&self) -> DemoCredentials {
        DemoCredentials {
            email: self.demo_email.clone(),
            password: self.demo_password.clone(),
        }
    }
}
