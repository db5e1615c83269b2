use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;

/// Startup state of a cube session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Session", inline)]
#[serde(default)]
pub struct SessionOptions {
    /// Catalog name code of the initial net (`Pickaxe-0`, `Bone-f-2`, ...).
    #[schemars(title = "Net")]
    pub net: String,
    /// Index of the base cell among the net's occupied cells.
    #[schemars(title = "Base Cell", range(min = 0, max = 5))]
    pub base_cell: usize,
    /// Initial orientation of the cube.
    #[schemars(title = "Orientation")]
    pub orientation: Orientation,
    /// World position of the cube's center.
    #[schemars(skip)]
    pub position: [f32; 3],
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            net: "Pickaxe-0".to_owned(),
            base_cell: 0,
            orientation: Orientation::CANONICAL,
            position: [0.0, 0.5, 0.0],
        }
    }
}
