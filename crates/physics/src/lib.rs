#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Scene Physics
//!
//! A small rigid-body stepper that reads MJCF-style scene files.
//!
//! The crate is split the way a host program consumes an engine:
//!
//! -   **[`Model`]:** immutable scene description, loaded once with
//!     [`Model::from_xml_path`].
//! -   **[`State`]:** mutable per-run data (time, body positions and
//!     velocities), created from a model with [`State::new`].
//! -   **[`step`]:** advances a state by one model timestep.
//!
//! Bodies translate under gravity and collide with static planes; there is
//! no rotational dynamics and no body-body contact.
//!
//! ```rust,ignore
//! use physics::{step, Model, State};
//!
//! let model = Model::from_xml_path("assets/simple_box.xml")?;
//! let mut state = State::new(&model);
//! for _ in 0..500 {
//!     step(&model, &mut state)?;
//! }
//! println!("box at {:?}", state.positions[0]);
//! ```

pub mod collision;
pub mod error;
pub mod integrator;
mod mjcf;
pub mod model;
pub mod simulation;
pub mod state;
pub mod types;

pub use error::PhysicsError;
pub use model::{Body, Model};
pub use simulation::{run, step};
pub use state::State;
pub use types::{Geom, Material, Shape, SimOptions, Vec3};
