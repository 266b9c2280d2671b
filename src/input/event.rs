/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState), which turns
/// them into per-frame held/pressed/released sets.
///
/// # Example
///
/// ```ignore
/// input.handle_event(InputEvent::Key { code: "KeyW".into(), pressed: true });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard key pressed or released.
    Key {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"ShiftLeft"`, ...).
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The window lost focus; every held input is released.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Convert a winit button. Side and extra buttons have no counterpart
    /// and yield `None`.
    #[must_use]
    pub const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event, ignoring keys winit cannot identify.
    #[must_use]
    pub fn from_winit_key(event: &winit::event::KeyEvent) -> Option<Self> {
        let winit::keyboard::PhysicalKey::Code(code) = event.physical_key
        else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            pressed: event.state == winit::event::ElementState::Pressed,
        })
    }

    /// Convert a winit mouse button event, ignoring unsupported buttons.
    #[must_use]
    pub fn from_winit_mouse(
        button: winit::event::MouseButton,
        state: winit::event::ElementState,
    ) -> Option<Self> {
        Some(Self::MouseButton {
            button: MouseButton::from_winit(button)?,
            pressed: state == winit::event::ElementState::Pressed,
        })
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use winit::event::{ElementState, MouseButton as WinitButton};

    use super::*;

    #[test]
    fn side_buttons_are_not_primary() {
        assert_eq!(MouseButton::from_winit(WinitButton::Back), None);
        assert_eq!(MouseButton::from_winit(WinitButton::Forward), None);
        assert_eq!(MouseButton::from_winit(WinitButton::Other(7)), None);
        assert_eq!(
            InputEvent::from_winit_mouse(WinitButton::Back, ElementState::Pressed),
            None
        );
    }

    #[test]
    fn primary_buttons_convert() {
        assert_eq!(MouseButton::from_winit(WinitButton::Left), Some(MouseButton::Left));
        assert_eq!(
            InputEvent::from_winit_mouse(WinitButton::Right, ElementState::Released),
            Some(InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed: false,
            })
        );
    }
}
