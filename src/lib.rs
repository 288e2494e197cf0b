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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedurally textured interactive book scene.
//!
//! Folio models one decorative 3D object — a book that opens and closes.
//! Its surface artwork is synthesized at runtime from drawing primitives
//! instead of loaded from asset files. The scene transitions between
//! closed and open visual states through per-frame exponential smoothing,
//! tilts toward the pointer, pulses a hover glow, and drifts a recyclable
//! particle overlay while open.
//!
//! # Key entry points
//!
//! - [`book::BookScene`] - the scene orchestrator (mount, activate, update)
//! - [`texture`] - procedural cover/spine/foil raster synthesis
//! - [`animation`] - smoothing animator and open/close state machine
//! - [`options::Options`] - runtime configuration (dimensions, palette,
//!   smoothing, particles)
//!
//! # Architecture
//!
//! The host owns the render loop. Every frame it calls
//! [`book::BookScene::update`] with the frame delta (or
//! [`book::BookScene::tick`] to derive one from a monotonic clock), then
//! reads object poses, materials and particles back out for drawing.
//! Pointer events are forwarded into the scene between frames; handlers
//! only write small target state that the next update consumes, so no
//! locking is needed anywhere.

pub mod animation;
pub mod book;
pub mod error;
pub mod input;
pub mod options;
pub mod particles;
pub mod scene;
pub mod texture;
pub mod util;
