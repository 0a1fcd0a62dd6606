use bon::Builder;
use std::fmt;

use crate::error::ControllerError;

pub const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";
pub const INSTANCE_ID_VAR: &str = "INSTANCE_ID";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

pub const DEFAULT_REGION: &str = "us-east-1";
// Placeholders accepted by simulated backends such as LocalStack
pub const DEFAULT_ACCESS_KEY_ID: &str = "test";
pub const DEFAULT_SECRET_ACCESS_KEY: &str = "test";

/// Settings read from the environment on every invocation.
///
/// The endpoint and instance id stay optional here so that their absence can
/// be reported as a response instead of a cold-start failure.
#[derive(Builder, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    #[builder(into)]
    pub endpoint_url: Option<String>,

    #[builder(into)]
    pub instance_id: Option<String>,

    #[builder(into, default = DEFAULT_REGION.to_string())]
    pub region: String,

    #[builder(into, default = DEFAULT_ACCESS_KEY_ID.to_string())]
    pub access_key_id: String,

    #[builder(into, default = DEFAULT_SECRET_ACCESS_KEY.to_string())]
    pub secret_access_key: String,
}

/// Everything needed to reach the instance-control API.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub endpoint_url: String,
    pub instance_id: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl ControllerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            endpoint_url: read(ENDPOINT_URL_VAR),
            instance_id: read(INSTANCE_ID_VAR),
            region: read(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: read(ACCESS_KEY_ID_VAR)
                .unwrap_or_else(|| DEFAULT_ACCESS_KEY_ID.to_string()),
            secret_access_key: read(SECRET_ACCESS_KEY_VAR)
                .unwrap_or_else(|| DEFAULT_SECRET_ACCESS_KEY.to_string()),
        }
    }

    /// Checks the required values, endpoint first.
    pub fn connection(&self) -> Result<ConnectionSettings, ControllerError> {
        let endpoint_url = self
            .endpoint_url
            .clone()
            .ok_or(ControllerError::MissingEndpointUrl)?;
        let instance_id = self
            .instance_id
            .clone()
            .ok_or(ControllerError::MissingInstanceId)?;

        Ok(ConnectionSettings {
            endpoint_url,
            instance_id,
            region: self.region.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
        })
    }
}

impl fmt::Debug for ControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("instance_id", &self.instance_id)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .finish()
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("endpoint_url", &self.endpoint_url)
            .field("instance_id", &self.instance_id)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .finish()
    }
}
