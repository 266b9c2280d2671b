use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::MotionCurve;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera Orienter", inline)]
#[serde(default)]
/// Look-at blending and tracking parameters.
pub struct OrienterOptions {
    /// Seconds the look-at blend takes when triggered from input.
    #[schemars(title = "Look Duration", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub look_duration: f32,
    /// Seconds to keep tracking after an input-triggered look-at.
    #[schemars(title = "Look Track Duration", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub look_track_duration: f32,
    /// Seconds an input-triggered track lasts.
    #[schemars(title = "Track Duration", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub track_duration: f32,
    /// Curve shaping orient-blend progress.
    // Must stay the last field: it serializes as a TOML sub-table.
    #[schemars(title = "Motion Curve")]
    pub motion_curve: MotionCurve,
}

impl Default for OrienterOptions {
    fn default() -> Self {
        Self {
            look_duration: 1.0,
            look_track_duration: 10.0,
            track_duration: 5.0,
            motion_curve: MotionCurve::Linear,
        }
    }
}
