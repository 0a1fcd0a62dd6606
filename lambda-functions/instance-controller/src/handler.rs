use serde_json::Value;
use std::future::Future;
use tracing::{error, info, warn};

use crate::action::extract_action;
use crate::config::{ConnectionSettings, ControllerConfig};
use crate::ec2::{apply_action, InstanceControl};
use crate::error::ControllerError;
use crate::response::{Response, SuccessBody};

/// Handles one invocation.
///
/// Configuration and input are checked before `connect` is called, so a
/// rejected request never reaches the remote API. Every outcome, including
/// remote failures, comes back as a [`Response`]; the only `Err` is a body
/// that fails to serialize.
pub async fn handle_event<F, Fut, C>(
    event: &Value,
    config: &ControllerConfig,
    connect: F,
) -> Result<Response, serde_json::Error>
where
    F: FnOnce(ConnectionSettings) -> Fut,
    Fut: Future<Output = C>,
    C: InstanceControl,
{
    match execute(event, config, connect).await {
        Ok(body) => Response::success(&body),
        Err(err) => {
            match &err {
                ControllerError::Remote(message) => error!("Remote call failed: {}", message),
                other => warn!("Rejected request: {}", other),
            }
            Response::from_error(&err)
        }
    }
}

async fn execute<F, Fut, C>(
    event: &Value,
    config: &ControllerConfig,
    connect: F,
) -> Result<SuccessBody, ControllerError>
where
    F: FnOnce(ConnectionSettings) -> Fut,
    Fut: Future<Output = C>,
    C: InstanceControl,
{
    let settings = config.connection()?;
    let action = extract_action(event)?;
    let instance_id = settings.instance_id.clone();

    info!(
        "Executing {} on instance {} via {}",
        action, instance_id, settings.endpoint_url
    );

    let controller = connect(settings).await;
    let raw_response = apply_action(&controller, action, &instance_id).await?;

    Ok(SuccessBody::new(action, &instance_id, raw_response))
}
