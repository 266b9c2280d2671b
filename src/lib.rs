// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
#![allow(clippy::cargo_common_metadata)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-stepped look-at camera orienting.
//!
//! Trackcam turns an actor toward a target and pitches its child camera to
//! match, either as an eased blend over a fixed duration or as direct
//! per-frame tracking. At most one orient/track job runs per orienter;
//! requests made while it is busy are ignored.
//!
//! # Key entry points
//!
//! - [`camera::CameraOrienter`] - the busy-guarded orienter and its
//!   `orient_towards` / `track` / `orient_then_track` requests
//! - [`camera::OrienterInput`] - starts requests from named input actions
//! - [`input::ActionInputMap`] - named action queries over a binding table
//! - [`schedule::TaskRunner`] - steps live tasks once per frame
//! - [`options::Options`] - TOML-backed tuning and key bindings
//!
//! # Frame model
//!
//! Everything runs on the host's frame loop. Each frame the host feeds
//! input events into an [`input::InputState`], polls
//! [`camera::OrienterInput`], then ticks the [`schedule::TaskRunner`] with
//! the frame delta from a [`util::frame_timing::FrameClock`]. Tasks write
//! rotations through the [`scene::TransformProvider`] seam, so any scene
//! representation can be driven; [`scene::SceneGraph`] is the bundled one.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod schedule;
pub mod util;

pub use error::TrackcamError;
