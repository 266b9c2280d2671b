//! Input handling: platform events, per-frame input state, and the
//! action map that turns named actions into physical-input queries.

/// Named action queries over the binding table.
pub mod action_map;
/// Platform-agnostic input events.
pub mod event;
/// Physical key/button identifiers and default action names.
pub mod keyboard;
/// Held / pressed / released tracking.
pub mod state;

pub use action_map::ActionInputMap;
pub use event::{InputEvent, MouseButton};
pub use keyboard::{actions, PhysicalInput};
pub use state::{InputSource, InputState};
