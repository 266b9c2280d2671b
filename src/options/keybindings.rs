use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::{actions, MouseButton, PhysicalInput};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
/// Action name → physical inputs table.
///
/// Any one of an action's inputs satisfies the action. The table is built
/// once at startup (defaults, TOML, or [`with_binding`](Self::with_binding))
/// and shared read-only afterwards.
pub struct ActionBindings {
    bindings: FxHashMap<String, Vec<PhysicalInput>>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        let key = PhysicalInput::key;
        Self::empty()
            .with_binding(actions::STRAFE_UP, [key("KeyW")])
            .with_binding(actions::STRAFE_LEFT, [key("KeyA")])
            .with_binding(actions::STRAFE_DOWN, [key("KeyS")])
            .with_binding(actions::STRAFE_RIGHT, [key("KeyD")])
            .with_binding(actions::JUMP, [key("Space")])
            .with_binding(actions::SPRINT, [key("ShiftLeft")])
            .with_binding(actions::CROUCH, [key("ControlLeft")])
            .with_binding(actions::ATTACK1, [MouseButton::Left.into()])
            .with_binding(actions::ATTACK2, [MouseButton::Right.into()])
    }
}

impl ActionBindings {
    /// A table with no actions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: FxHashMap::default(),
        }
    }

    /// Replace the inputs bound to `action`. Duplicate inputs are dropped,
    /// keeping first-seen order.
    #[must_use]
    pub fn with_binding(
        mut self,
        action: &str,
        inputs: impl IntoIterator<Item = PhysicalInput>,
    ) -> Self {
        let mut list: Vec<PhysicalInput> = Vec::new();
        for input in inputs {
            if !list.contains(&input) {
                list.push(input);
            }
        }
        let _ = self.bindings.insert(action.to_owned(), list);
        self
    }

    /// Inputs bound to `action`, or `None` if the action is not registered.
    #[must_use]
    pub fn inputs(&self, action: &str) -> Option<&[PhysicalInput]> {
        self.bindings.get(action).map(Vec::as_slice)
    }

    /// Whether `action` is registered (possibly with no inputs).
    #[must_use]
    pub fn contains(&self, action: &str) -> bool {
        self.bindings.contains_key(action)
    }

    /// Registered action names, sorted.
    #[must_use]
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_stock_layout() {
        let bindings = ActionBindings::default();
        assert_eq!(
            bindings.inputs(actions::STRAFE_UP),
            Some(&[PhysicalInput::key("KeyW")][..])
        );
        assert_eq!(
            bindings.inputs(actions::ATTACK2),
            Some(&[PhysicalInput::Mouse(MouseButton::Right)][..])
        );
        assert_eq!(bindings.action_names().len(), 9);
        assert!(bindings.inputs("Dance").is_none());
    }

    #[test]
    fn with_binding_dedups_and_replaces() {
        let bindings = ActionBindings::default().with_binding(
            actions::JUMP,
            [
                PhysicalInput::key("Space"),
                PhysicalInput::key("KeyJ"),
                PhysicalInput::key("Space"),
            ],
        );
        assert_eq!(
            bindings.inputs(actions::JUMP),
            Some(
                &[PhysicalInput::key("Space"), PhysicalInput::key("KeyJ")][..]
            )
        );
    }

    #[test]
    fn empty_binding_is_still_registered() {
        let bindings = ActionBindings::empty().with_binding("Wave", []);
        assert!(bindings.contains("Wave"));
        assert_eq!(bindings.inputs("Wave"), Some(&[][..]));
    }
}
