use crate::constants::{env as env_constants, network as network_constants};
use crate::errors::DispatchError;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_endpoint: String,
}

/// Collaborator seam for the host tool's credential storage. The connector
/// never persists or logs the key itself.
pub trait CredentialProvider: Send + Sync {
    fn credentials(&self) -> Result<Credentials, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(api_key: impl Into<String>, api_endpoint: Option<String>) -> Self {
        Self {
            credentials: Credentials {
                api_key: api_key.into(),
                api_endpoint: api_endpoint
                    .unwrap_or_else(|| network_constants::DEFAULT_API_ENDPOINT.to_string()),
            },
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn credentials(&self) -> Result<Credentials, DispatchError> {
        if self.credentials.api_key.trim().is_empty() {
            return Err(DispatchError::setup("API key must not be empty"));
        }
        Ok(self.credentials.clone())
    }
}

/// Reads `TESS_API_KEY` (and optionally `TESS_API_ENDPOINT`) from the
/// environment on every call, so rotated keys are picked up without restart.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialProvider for EnvCredentials {
    fn credentials(&self) -> Result<Credentials, DispatchError> {
        let api_key = std::env::var(env_constants::API_KEY)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DispatchError::setup(format!("{} is not set", env_constants::API_KEY))
            })?;
        let api_endpoint = std::env::var(env_constants::API_ENDPOINT)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| network_constants::DEFAULT_API_ENDPOINT.to_string());
        Ok(Credentials {
            api_key,
            api_endpoint,
        })
    }
}
