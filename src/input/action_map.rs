//! Answers "is this action held / pressed / released" from physical input.
//!
//! The [`ActionInputMap`] is the only thing that sits between named actions
//! and the per-frame [`InputSource`]. Its binding table is injected at
//! construction and never changes afterwards.

use std::sync::Arc;

use super::keyboard::PhysicalInput;
use super::state::InputSource;
use crate::error::TrackcamError;
use crate::options::ActionBindings;

/// Named-action queries over an immutable binding table.
///
/// # Usage
///
/// ```ignore
/// let actions = ActionInputMap::new(Arc::new(options.keybindings));
///
/// // Once per frame, after feeding events into `input_state`:
/// if actions.was_pressed_this_frame(&input_state, "Jump")? {
///     player.jump();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ActionInputMap {
    bindings: Arc<ActionBindings>,
}

impl ActionInputMap {
    /// Wrap a shared binding table.
    #[must_use]
    pub fn new(bindings: Arc<ActionBindings>) -> Self {
        Self { bindings }
    }

    /// Read-only access to the binding table.
    #[must_use]
    pub fn bindings(&self) -> &ActionBindings {
        &self.bindings
    }

    /// Any of the action's inputs is held.
    pub fn is_held(
        &self,
        input: &dyn InputSource,
        action: &str,
    ) -> Result<bool, TrackcamError> {
        self.any(action, |i| input.is_down(i))
    }

    /// Any of the action's inputs went down this frame.
    pub fn was_pressed_this_frame(
        &self,
        input: &dyn InputSource,
        action: &str,
    ) -> Result<bool, TrackcamError> {
        self.any(action, |i| input.just_pressed(i))
    }

    /// Any of the action's inputs went up this frame.
    pub fn was_released_this_frame(
        &self,
        input: &dyn InputSource,
        action: &str,
    ) -> Result<bool, TrackcamError> {
        self.any(action, |i| input.just_released(i))
    }

    fn any(
        &self,
        action: &str,
        pred: impl Fn(&PhysicalInput) -> bool,
    ) -> Result<bool, TrackcamError> {
        let inputs = self
            .bindings
            .inputs(action)
            .ok_or_else(|| TrackcamError::UnknownAction(action.to_owned()))?;
        Ok(inputs.iter().any(pred))
    }
}

impl Default for ActionInputMap {
    fn default() -> Self {
        Self::new(Arc::new(ActionBindings::default()))
    }
}
