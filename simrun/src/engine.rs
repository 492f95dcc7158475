//! # Engine Capability
//!
//! The runner drives a simulation through the [`Engine`] trait and never
//! touches physics or windowing code directly. [`NativeEngine`] plugs in the
//! workspace `physics` crate and, with the `render` feature, the `render`
//! crate's passive viewer. Tests substitute recording fakes.

use std::path::Path;

/// Black-box simulation engine consumed by [`crate::runner::run`].
///
/// Every operation is fallible. Model loading and stepping report a typed
/// [`Engine::Error`] that the runner surfaces unchanged; viewer failures are
/// reported through `anyhow` because the runner only logs them.
pub trait Engine {
    type Model;
    type State;
    type Error: std::error::Error + Send + Sync + 'static;
    type Viewer: Viewer<Model = Self::Model, State = Self::State>;

    /// Build the immutable model from a scene file.
    fn load_model(&mut self, path: &Path) -> Result<Self::Model, Self::Error>;

    /// Create fresh simulation state for `model`.
    fn make_state(&mut self, model: &Self::Model) -> Result<Self::State, Self::Error>;

    /// Advance `state` by exactly one engine step.
    fn step(&mut self, model: &Self::Model, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Open a passive viewer showing `model` and `state`.
    fn launch_viewer(
        &mut self,
        model: &Self::Model,
        state: &Self::State,
    ) -> anyhow::Result<Self::Viewer>;
}

/// Live display of a running simulation.
///
/// A viewer observes the model and state only for the duration of a
/// [`Viewer::sync`] call. [`Viewer::close`] consumes the handle.
pub trait Viewer {
    type Model;
    type State;

    /// Bring the display up to date with `state`.
    fn sync(&mut self, model: &Self::Model, state: &Self::State) -> anyhow::Result<()>;

    /// Release the display.
    fn close(self);
}

/// Engine backed by the workspace `physics` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeEngine;

impl Engine for NativeEngine {
    type Model = physics::Model;
    type State = physics::State;
    type Error = physics::PhysicsError;
    type Viewer = NativeViewer;

    fn load_model(&mut self, path: &Path) -> Result<Self::Model, Self::Error> {
        physics::Model::from_xml_path(path)
    }

    fn make_state(&mut self, model: &Self::Model) -> Result<Self::State, Self::Error> {
        Ok(physics::State::new(model))
    }

    fn step(&mut self, model: &Self::Model, state: &mut Self::State) -> Result<(), Self::Error> {
        physics::step(model, state)
    }

    fn launch_viewer(
        &mut self,
        model: &Self::Model,
        state: &Self::State,
    ) -> anyhow::Result<Self::Viewer> {
        NativeViewer::launch(model, state)
    }
}

/// Viewer used by [`NativeEngine`].
#[cfg(feature = "render")]
pub struct NativeViewer(render::PassiveViewer);

#[cfg(feature = "render")]
impl NativeViewer {
    fn launch(model: &physics::Model, state: &physics::State) -> anyhow::Result<Self> {
        render::PassiveViewer::launch(model, state).map(Self)
    }
}

#[cfg(feature = "render")]
impl Viewer for NativeViewer {
    type Model = physics::Model;
    type State = physics::State;

    fn sync(&mut self, model: &Self::Model, state: &Self::State) -> anyhow::Result<()> {
        self.0.sync(model, state)
    }

    fn close(self) {
        self.0.close();
    }
}

/// Stand-in when the crate is built without the `render` feature; it can
/// never be launched.
#[cfg(not(feature = "render"))]
pub enum NativeViewer {}

#[cfg(not(feature = "render"))]
impl NativeViewer {
    fn launch(_model: &physics::Model, _state: &physics::State) -> anyhow::Result<Self> {
        anyhow::bail!("simrun was built without the `render` feature")
    }
}

#[cfg(not(feature = "render"))]
impl Viewer for NativeViewer {
    type Model = physics::Model;
    type State = physics::State;

    fn sync(&mut self, _model: &Self::Model, _state: &Self::State) -> anyhow::Result<()> {
        match *self {}
    }

    fn close(self) {
        match self {}
    }
}
