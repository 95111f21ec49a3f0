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

//! Orientation and selection controller for interactive sky viewers.
//!
//! Skyview turns raw per-frame inputs (device attitude, touch samples,
//! elapsed time) into a virtual camera pose and field of view, classifies
//! taps against drags to pick celestial objects, and lays out name labels
//! for the objects nearest the center of the view.
//!
//! # Key entry points
//!
//! - [`controller::ModeController`] - owns the rotation-mode state machine
//!   and runs the per-frame update
//! - [`controller::SkyCommand`] - the public operation vocabulary
//! - [`scene::SkyCatalog`] - the selectable object set
//! - [`options::SkyOptions`] - runtime configuration (camera, gestures,
//!   selection, labels, transitions)
//!
//! # Frame order
//!
//! Each call to [`controller::ModeController::update`] resolves rotation
//! for the active mode first (gyro, manual drag, or focused orbit), then
//! pinch zoom, then tap selection, then label placement. While an
//! enter/leave transition is running only the transition advances.
//!
//! Rendering, asset loading, geolocation, and the GUI panel live outside
//! this crate; they read [`camera::CameraState`], the label slots, and the
//! drained [`controller::SkyEvent`] queue.

pub mod animation;
pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod labels;
pub mod options;
pub mod scene;
pub mod selection;
pub mod util;
