use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_ACCELERATION, DEFAULT_INITIAL_SPEED};

/// Motion profile of discrete pose changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pose", inline)]
#[serde(default)]
pub struct PoseOptions {
    /// Speed at the start of each pose change.
    #[schemars(title = "Initial Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub initial_speed: f32,
    /// Speed added on every tick of a pose change.
    #[schemars(title = "Acceleration", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub acceleration: f32,
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            initial_speed: DEFAULT_INITIAL_SPEED,
            acceleration: DEFAULT_ACCELERATION,
        }
    }
}
