use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::ControllerError;

/// Lambda proxy-style result: a status code plus a JSON-encoded body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessBody {
    pub message: String,
    pub raw_response: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl SuccessBody {
    pub fn new(action: Action, instance_id: &str, raw_response: String) -> Self {
        Self {
            message: format!("Action '{}' executed on instance {}", action, instance_id),
            raw_response,
        }
    }
}

impl Response {
    pub fn success(body: &SuccessBody) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn from_error(error: &ControllerError) -> Result<Self, serde_json::Error> {
        let body = ErrorBody {
            error: error.to_string(),
        };

        Ok(Self {
            status_code: error.status_code(),
            body: serde_json::to_string(&body)?,
        })
    }
}
