use rustc_hash::FxHashSet;

use super::event::InputEvent;
use super::keyboard::PhysicalInput;

/// Per-frame view of physical inputs.
///
/// Implemented by [`InputState`]; tests and host engines can provide their
/// own.
pub trait InputSource {
    /// The input is currently held down.
    fn is_down(&self, input: &PhysicalInput) -> bool;

    /// The input went down during the current frame.
    fn just_pressed(&self, input: &PhysicalInput) -> bool;

    /// The input went up during the current frame.
    fn just_released(&self, input: &PhysicalInput) -> bool;
}

/// Tracks held inputs and this frame's press/release edges.
///
/// Feed events with [`handle_event`](Self::handle_event) as they arrive and
/// call [`end_frame`](Self::end_frame) once all per-frame queries are done.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: FxHashSet<PhysicalInput>,
    pressed: FxHashSet<PhysicalInput>,
    released: FxHashSet<PhysicalInput>,
}

impl InputState {
    /// Create a state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one platform event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { code, pressed } => {
                self.set(PhysicalInput::Key(code), pressed);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.set(PhysicalInput::Mouse(button), pressed);
            }
            InputEvent::FocusLost => {
                for input in self.held.drain() {
                    let _ = self.released.insert(input);
                }
            }
        }
    }

    /// Record a press or release. Repeated presses of a held input are not
    /// new edges.
    pub fn set(&mut self, input: PhysicalInput, pressed: bool) {
        if pressed {
            if self.held.insert(input.clone()) {
                let _ = self.pressed.insert(input);
            }
        } else if self.held.remove(&input) {
            let _ = self.released.insert(input);
        }
    }

    /// Clear this frame's edges; held inputs stay held.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

impl InputSource for InputState {
    fn is_down(&self, input: &PhysicalInput) -> bool {
        self.held.contains(input)
    }

    fn just_pressed(&self, input: &PhysicalInput) -> bool {
        self.pressed.contains(input)
    }

    fn just_released(&self, input: &PhysicalInput) -> bool {
        self.released.contains(input)
    }
}
