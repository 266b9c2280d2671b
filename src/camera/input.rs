use super::orienter::CameraOrienter;
use super::task::CameraTask;
use crate::error::TrackcamError;
use crate::input::{actions, ActionInputMap, InputSource};
use crate::options::OrienterOptions;
use crate::scene::TransformId;

/// Starts orienter tasks from action presses.
///
/// The look action blends toward the target and then tracks it; the track
/// action tracks directly. When both fire on the same frame the look action
/// wins.
#[derive(Debug, Clone)]
pub struct OrienterInput {
    look_action: String,
    track_action: String,
    look_duration: f32,
    look_track_duration: f32,
    track_duration: f32,
}

impl OrienterInput {
    /// Bind to the default `Attack1` (look) and `Attack2` (track) actions.
    #[must_use]
    pub fn new(options: &OrienterOptions) -> Self {
        Self::with_actions(options, actions::ATTACK1, actions::ATTACK2)
    }

    /// Bind to custom action names.
    #[must_use]
    pub fn with_actions(
        options: &OrienterOptions,
        look_action: &str,
        track_action: &str,
    ) -> Self {
        Self {
            look_action: look_action.to_owned(),
            track_action: track_action.to_owned(),
            look_duration: options.look_duration,
            look_track_duration: options.look_track_duration,
            track_duration: options.track_duration,
        }
    }

    /// Check this frame's presses and start at most one task toward
    /// `target`.
    ///
    /// Returns `Ok(None)` when neither action fired or the orienter was
    /// already busy. An action missing from the binding table is an error.
    pub fn poll(
        &self,
        orienter: &CameraOrienter,
        actions: &ActionInputMap,
        input: &dyn InputSource,
        target: TransformId,
    ) -> Result<Option<CameraTask>, TrackcamError> {
        let look = actions.was_pressed_this_frame(input, &self.look_action)?;
        let track = actions.was_pressed_this_frame(input, &self.track_action)?;

        let task = if look {
            orienter.orient_then_track(
                target,
                self.look_duration,
                self.look_track_duration,
            )
        } else if track {
            orienter.track(target, self.track_duration)
        } else {
            return Ok(None);
        };

        Ok((!task.is_finished()).then_some(task))
    }
}
