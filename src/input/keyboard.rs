use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::event::MouseButton;
use crate::error::TrackcamError;

/// Action names bound by the default table.
pub mod actions {
    /// Move forward.
    pub const STRAFE_UP: &str = "Strafe Up";
    /// Move left.
    pub const STRAFE_LEFT: &str = "Strafe Left";
    /// Move backward.
    pub const STRAFE_DOWN: &str = "Strafe Down";
    /// Move right.
    pub const STRAFE_RIGHT: &str = "Strafe Right";
    /// Jump.
    pub const JUMP: &str = "Jump";
    /// Sprint modifier.
    pub const SPRINT: &str = "Sprint";
    /// Crouch.
    pub const CROUCH: &str = "Crouch";
    /// Primary attack; also starts look-at-and-track.
    pub const ATTACK1: &str = "Attack1";
    /// Secondary attack; also starts a timed track.
    pub const ATTACK2: &str = "Attack2";
}

/// A single physical key or mouse button.
///
/// Serializes as a plain string so TOML tables stay readable:
/// ```toml
/// [keybindings]
/// "Strafe Up" = ["KeyW", "ArrowUp"]
/// "Attack1" = ["MouseLeft"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PhysicalInput {
    /// Keyboard key in `winit::keyboard::KeyCode` debug format.
    Key(String),
    /// Mouse button.
    Mouse(MouseButton),
}

impl PhysicalInput {
    /// Keyboard key from its code string.
    #[must_use]
    pub fn key(code: &str) -> Self {
        Self::Key(code.to_owned())
    }
}

impl fmt::Display for PhysicalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(code) => f.write_str(code),
            Self::Mouse(MouseButton::Left) => f.write_str("MouseLeft"),
            Self::Mouse(MouseButton::Right) => f.write_str("MouseRight"),
            Self::Mouse(MouseButton::Middle) => f.write_str("MouseMiddle"),
        }
    }
}

impl FromStr for PhysicalInput {
    type Err = TrackcamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(TrackcamError::InvalidBinding(
                "empty input name".to_owned(),
            )),
            "MouseLeft" => Ok(Self::Mouse(MouseButton::Left)),
            "MouseRight" => Ok(Self::Mouse(MouseButton::Right)),
            "MouseMiddle" => Ok(Self::Mouse(MouseButton::Middle)),
            _ if s.chars().any(char::is_whitespace) => {
                Err(TrackcamError::InvalidBinding(format!(
                    "input name {s:?} contains whitespace"
                )))
            }
            _ => Ok(Self::Key(s.to_owned())),
        }
    }
}

impl TryFrom<String> for PhysicalInput {
    type Error = TrackcamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhysicalInput> for String {
    fn from(input: PhysicalInput) -> Self {
        input.to_string()
    }
}

impl From<MouseButton> for PhysicalInput {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::KeyCode> for PhysicalInput {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        Self::Key(format!("{code:?}"))
    }
}
