pub mod action;
pub mod config;
pub mod ec2;
pub mod error;
pub mod handler;
pub mod response;

pub use action::{extract_action, find_action, Action};
pub use config::{ConnectionSettings, ControllerConfig};
pub use ec2::{apply_action, Ec2InstanceController, InstanceControl};
pub use error::ControllerError;
pub use handler::handle_event;
pub use response::{ErrorBody, Response, SuccessBody};
