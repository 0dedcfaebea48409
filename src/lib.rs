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

//! GPU-accelerated night-scene viewer built on wgpu.
//!
//! Downpour renders a mouse-orbitable rainy parking-lot tableau: glTF
//! props placed from a TOML manifest, procedural ground and moon geometry,
//! a night lighting rig with exponential fog, and a fixed-size rain
//! particle buffer recycled every frame.
//!
//! # Key entry points
//!
//! - [`engine::SceneRenderEngine`] - the rendering engine
//! - [`camera::controller::OrbitController`] - the orbit camera state
//!   machine
//! - [`rain::RainParticles`] - the per-frame particle animator
//! - [`options::Options`] - runtime configuration (camera, lighting, rain)
//!
//! # Architecture
//!
//! Everything runs on one thread. The window's redraw request drives the
//! frame: the engine advances the rain buffer one step, re-uploads the
//! changed instance data, then records a single forward pass (scene meshes
//! with Lambert lighting and fog, rain billboards on top) and presents.
//! Pointer and wheel events mutate the orbit controller between frames.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod rain;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
