//! Shared utilities.
//!
//! Angle wrapping and shortest-path correction, motion curves, and the
//! frame clock that feeds per-frame time to tasks.

pub mod angles;
pub mod easing;
/// Frame delta and elapsed-time bookkeeping.
pub mod frame_timing;
