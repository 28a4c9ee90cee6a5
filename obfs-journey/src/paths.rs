//! Wizard URL layout.
use crate::journey::{ConnectionType, Step};

pub const HOME_PATH: &str = "/";
pub const CONNECTION_PREFIX: &str = "/open-banking/connection";
/// Where the wizard sends users whose step content cannot be resolved.
pub const START_PATH: &str = "/open-banking/connection/affordability";

#[must_use]
pub fn entry_path(connection_type: ConnectionType) -> String {
    format!("{CONNECTION_PREFIX}/{connection_type}")
}

#[must_use]
pub fn step_path(journey_ref: &str, step: Step) -> String {
    format!("{CONNECTION_PREFIX}/{journey_ref}/{step}")
}
