use crate::model::Model;
use crate::types::Vec3;

/// Mutable simulation data for one [`Model`], advanced in place by
/// [`crate::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Simulated time in seconds.
    pub time: f64,
    /// World position of each dynamic body frame.
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    /// Number of geom/plane contacts resolved during the last step.
    pub active_contacts: usize,
}

impl State {
    #[must_use]
    pub fn new(model: &Model) -> Self {
        Self {
            time: 0.0,
            positions: model.bodies.iter().map(|b| b.initial_pos).collect(),
            velocities: vec![Vec3::ZERO; model.bodies.len()],
            active_contacts: 0,
        }
    }

    /// Return to the initial configuration of `model`.
    pub fn reset(&mut self, model: &Model) {
        *self = Self::new(model);
    }
}
