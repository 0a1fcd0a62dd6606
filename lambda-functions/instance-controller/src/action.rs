use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ControllerError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            _ => Err(ControllerError::InvalidAction),
        }
    }
}

/// Pulls the raw `action` value out of an invocation event.
///
/// Direct invocations carry `action` at the top level. API Gateway proxy
/// events carry it inside `body`, either as an object or as a JSON string.
/// Anything that does not fit one of those shapes yields `None`.
pub fn find_action(event: &Value) -> Option<Value> {
    let event = event.as_object()?;

    if let Some(action) = event.get("action") {
        return Some(action.clone());
    }

    let body = event.get("body")?;
    match body {
        Value::String(raw) => {
            let parsed: Value = serde_json::from_str(raw).ok()?;
            parsed.as_object()?.get("action").cloned()
        }
        Value::Object(map) => map.get("action").cloned(),
        _ => None,
    }
}

/// Normalizes an event into an [`Action`], rejecting anything but the exact
/// strings `"start"` and `"stop"`.
pub fn extract_action(event: &Value) -> Result<Action, ControllerError> {
    find_action(event)
        .as_ref()
        .and_then(Value::as_str)
        .ok_or(ControllerError::InvalidAction)?
        .parse()
}
