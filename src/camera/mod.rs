//! Look-at camera orienting.
//!
//! A [`CameraOrienter`] drives an actor/camera rig: the actor yaws, its
//! child camera pitches. Requests produce [`CameraTask`]s that a host steps
//! once per frame, and at most one of them is live per orienter.

/// Input-triggered orienter requests.
pub mod input;
/// Look rotations and the actor/camera split.
pub mod look;
/// The busy-guarded orienter and its entry points.
pub mod orienter;
/// Frame-stepped orient and track tasks.
pub mod task;

pub use input::OrienterInput;
pub use look::{look_rotation, yaw_pitch_of, RigHandles, WORLD_UP};
pub use orienter::CameraOrienter;
pub use task::CameraTask;
