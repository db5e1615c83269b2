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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Cube-net folding engine.
//!
//! A net is six squares on an 8×8 grid. Given a net and the square that rests
//! on the table, the engine works out which cube face every square becomes
//! and how the squares hinge on each other, then animates the net folding
//! into a cube and the cube turning between its 24 orientations.
//!
//! # Key entry points
//!
//! - [`session::CubeSession`] - one interactive cube, advanced by `tick(dt)`
//! - [`hierarchy::resolve`] - net + base cell + base face → hinge hierarchy
//! - [`orientation::Orientation`] - the 24-state rotation group
//! - [`net`] - grids and the built-in catalog of named nets
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Everything is single-threaded and tick-driven. Static tables (orientation
//! group, face adjacency, child rotations) are shared read-only by every
//! session. The session caches the hierarchy and rebuilds it only when the
//! net, the base cell or the resting orientation changes; rendering layers
//! read a [`session::SessionSnapshot`] each frame.

pub mod animation;
pub mod error;
pub mod hierarchy;
pub mod net;
pub mod options;
pub mod orientation;
pub mod session;
pub mod topology;

pub use error::{CubeNetError, InvalidNetReason};
