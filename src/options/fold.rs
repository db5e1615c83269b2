use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{FoldMode, DEFAULT_AUTOPLAY_SPEED, FULL_PROGRESS};

/// Fold animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fold", inline)]
#[serde(default)]
pub struct FoldOptions {
    /// How hinge angles follow the global progress.
    #[schemars(title = "Animation Mode")]
    pub mode: FoldMode,
    /// Autoplay speed in progress units per second.
    #[schemars(title = "Autoplay Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub autoplay_speed: f32,
    /// Progress at startup (0 = flat net, 100 = closed cube).
    #[schemars(title = "Initial Progress", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub initial_progress: f32,
    /// Start with autoplay running.
    #[schemars(title = "Autoplay")]
    pub autoplay: bool,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            mode: FoldMode::Simultaneous,
            autoplay_speed: DEFAULT_AUTOPLAY_SPEED,
            initial_progress: FULL_PROGRESS,
            autoplay: false,
        }
    }
}
