use instance_controller::{handle_event, ControllerConfig, Ec2InstanceController, Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, Instrument};

async fn function_handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);
    let config = ControllerConfig::from_env();

    let response = handle_event(&event.payload, &config, Ec2InstanceController::connect)
        .instrument(span)
        .await?;

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .init();

    run(service_fn(function_handler)).await
}
