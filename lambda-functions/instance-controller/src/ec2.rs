use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_ec2::config::Credentials;
use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::Client as Ec2Client;
use tracing::debug;

use crate::action::Action;
use crate::config::ConnectionSettings;
use crate::error::ControllerError;

const CREDENTIALS_PROVIDER_NAME: &str = "instance-controller-env";

/// Start/stop operations against a single compute instance.
///
/// Implementations return an opaque rendering of the raw API output on
/// success; callers must not parse it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InstanceControl {
    async fn start_instance(&self, instance_id: &str) -> Result<String, ControllerError>;

    async fn stop_instance(&self, instance_id: &str) -> Result<String, ControllerError>;
}

/// Runs `action` against `instance_id` through any [`InstanceControl`].
pub async fn apply_action<C>(
    controller: &C,
    action: Action,
    instance_id: &str,
) -> Result<String, ControllerError>
where
    C: InstanceControl + ?Sized,
{
    match action {
        Action::Start => controller.start_instance(instance_id).await,
        Action::Stop => controller.stop_instance(instance_id).await,
    }
}

pub struct Ec2InstanceController {
    client: Ec2Client,
}

impl Ec2InstanceController {
    /// Builds an EC2 client pointed at the configured endpoint with static
    /// credentials, so no credential chain lookup happens.
    pub async fn connect(settings: ConnectionSettings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id,
            settings.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(settings.region))
            .endpoint_url(settings.endpoint_url)
            .credentials_provider(credentials)
            .load()
            .await;

        Self::from_client(Ec2Client::new(&config))
    }

    pub fn from_client(client: Ec2Client) -> Self {
        Self { client }
    }
}

// SDK errors collapse into one generic remote failure carrying the full
// source chain as text.
fn remote_error<E>(err: E) -> ControllerError
where
    E: std::error::Error,
{
    ControllerError::Remote(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl InstanceControl for Ec2InstanceController {
    async fn start_instance(&self, instance_id: &str) -> Result<String, ControllerError> {
        let output = self
            .client
            .start_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(remote_error)?;

        debug!("StartInstances output: {:?}", output);
        Ok(format!("{:?}", output))
    }

    async fn stop_instance(&self, instance_id: &str) -> Result<String, ControllerError> {
        let output = self
            .client
            .stop_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .map_err(remote_error)?;

        debug!("StopInstances output: {:?}", output);
        Ok(format!("{:?}", output))
    }
}
