//! Errors surfaced to the caller as part of a normal response.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// AWS_ENDPOINT_URL is unset or empty
    #[error("Missing AWS_ENDPOINT_URL env var")]
    MissingEndpointUrl,

    /// INSTANCE_ID is unset or empty
    #[error("Missing INSTANCE_ID env var")]
    MissingInstanceId,

    /// Event carried no usable action
    #[error("Invalid or missing 'action'. Use 'start' or 'stop'.")]
    InvalidAction,

    /// Anything raised while talking to the instance-control API
    #[error("{0}")]
    Remote(String),
}

impl ControllerError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAction => 400,
            Self::MissingEndpointUrl | Self::MissingInstanceId | Self::Remote(_) => 500,
        }
    }
}
