//! # Physics Simulation Core
//!
//! One call to [`step`] advances a [`State`] by the model timestep:
//! integrate, then resolve plane contacts body by body.

use crate::collision::{detect_geom_plane_collision, resolve_plane_contact};
use crate::error::PhysicsError;
use crate::integrator::integrate_bodies;
use crate::model::Model;
use crate::state::State;

/// Advance `state` by exactly one timestep of `model`.
///
/// # Errors
///
/// Returns [`PhysicsError::Diverged`] if any body position or velocity
/// becomes non-finite.
pub fn step(model: &Model, state: &mut State) -> Result<(), PhysicsError> {
    #[allow(clippy::cast_possible_truncation)]
    let dt = model.options.timestep as f32;

    integrate_bodies(
        &mut state.positions,
        &mut state.velocities,
        model.options.gravity,
        dt,
    );

    state.active_contacts = 0;
    for (body, (pos, vel)) in model
        .bodies
        .iter()
        .zip(state.positions.iter_mut().zip(state.velocities.iter_mut()))
    {
        for geom in &body.geoms {
            for (plane_point, plane_normal, plane) in model.planes() {
                if let Some(contact) =
                    detect_geom_plane_collision(geom, *pos, plane_point, plane_normal, plane)
                {
                    resolve_plane_contact(pos, vel, &contact);
                    state.active_contacts += 1;
                }
            }
        }
    }

    state.time += model.options.timestep;

    if let Some(index) = state
        .positions
        .iter()
        .zip(&state.velocities)
        .position(|(p, v)| !(p.is_finite() && v.is_finite()))
    {
        return Err(PhysicsError::Diverged {
            body: model.bodies[index].name.clone(),
            time: state.time,
        });
    }

    Ok(())
}

/// Run `steps` consecutive steps, stopping at the first error.
///
/// # Errors
///
/// Propagates the first error returned by [`step`].
pub fn run(model: &Model, state: &mut State, steps: usize) -> Result<(), PhysicsError> {
    for _ in 0..steps {
        step(model, state)?;
    }
    Ok(())
}
