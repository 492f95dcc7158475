//! # simrun
//!
//! A small command-line driver for a physics scene. It loads a scene file,
//! steps the simulation until a step count or wall-clock limit is reached
//! and, unless told to run headless, shows the scene in a live viewer.
//!
//! -   [`runner`] owns the run loop and its termination and viewer-fallback
//!     rules. It is generic over the [`engine::Engine`] trait.
//! -   [`engine`] defines that trait and the native implementation backed by
//!     the `physics` and `render` crates.
//! -   [`cli`] and [`app`] turn command-line flags into a run.

pub mod app;
pub mod cli;
pub mod engine;
pub mod runner;

pub use engine::{Engine, NativeEngine, Viewer};
pub use runner::{run, RunError, RunParameters};
