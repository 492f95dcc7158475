//! # Simulation Runner
//!
//! Executes one bounded run: load the scene, optionally attach a viewer,
//! step until a limit is reached and report how many steps were taken.
//!
//! Viewer problems never end a run. A viewer that fails to launch or to
//! sync is closed, logged, and the rest of the run continues headless.
//! Everything else (missing asset, engine errors) is returned to the caller.

use crate::engine::{Engine, Viewer};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

const PROGRESS_INTERVAL: u64 = 1000;

/// Fixed configuration of a single run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunParameters {
    /// Never open a viewer.
    pub headless: bool,
    /// Stop after this many steps; `0` disables the limit.
    pub step_limit: u64,
    /// Stop after this many wall-clock seconds; `0` disables the limit.
    pub max_seconds: f64,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            headless: false,
            step_limit: 0,
            max_seconds: 5.0,
        }
    }
}

impl RunParameters {
    /// Neither limit is set, so the loop only ends when the process does.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.step_limit == 0 && self.max_seconds <= 0.0
    }

    /// Whichever enabled limit is reached first ends the run.
    #[must_use]
    pub fn should_stop(&self, steps: u64, elapsed: Duration) -> bool {
        let steps_reached = self.step_limit > 0 && steps >= self.step_limit;
        let time_reached = self.max_seconds > 0.0 && elapsed.as_secs_f64() >= self.max_seconds;
        steps_reached || time_reached
    }
}

#[derive(Debug, Error)]
pub enum RunError<E>
where
    E: std::error::Error + 'static,
{
    #[error("scene asset not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Engine(#[from] E),
}

/// Holds the at-most-one viewer of a run. Emptied by [`ViewerSlot::teardown`],
/// which runs on sync failure, at loop exit and on drop.
struct ViewerSlot<V: Viewer> {
    viewer: Option<V>,
}

impl<V: Viewer> ViewerSlot<V> {
    fn empty() -> Self {
        Self { viewer: None }
    }

    fn holding(viewer: V) -> Self {
        Self {
            viewer: Some(viewer),
        }
    }

    fn is_active(&self) -> bool {
        self.viewer.is_some()
    }

    /// Returns `false` once the viewer is gone.
    fn sync(&mut self, model: &V::Model, state: &V::State) -> bool {
        let Some(viewer) = self.viewer.as_mut() else {
            return false;
        };
        if let Err(e) = viewer.sync(model, state) {
            warn!("Viewer sync error, closing: {e:#}");
            self.teardown();
            return false;
        }
        true
    }

    fn teardown(&mut self) {
        if let Some(viewer) = self.viewer.take() {
            viewer.close();
        }
    }
}

impl<V: Viewer> Drop for ViewerSlot<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Run one simulation of the scene at `asset` and return the number of
/// steps completed.
///
/// If both limits in `params` are zero this never returns.
///
/// # Errors
///
/// Returns [`RunError::NotFound`] before touching the engine when `asset`
/// does not exist, and [`RunError::Engine`] with the engine's own error if
/// loading or stepping fails.
pub fn run<E: Engine>(
    engine: &mut E,
    asset: &Path,
    params: &RunParameters,
) -> Result<u64, RunError<E::Error>> {
    if !asset.exists() {
        return Err(RunError::NotFound(asset.to_path_buf()));
    }

    let model = engine.load_model(asset)?;
    let mut state = engine.make_state(&model)?;

    let mut headless = params.headless;
    let mut viewer = ViewerSlot::empty();
    if !headless {
        match engine.launch_viewer(&model, &state) {
            Ok(v) => viewer = ViewerSlot::holding(v),
            Err(e) => {
                warn!("Viewer launch failed ({e:#}); continuing headless.");
                headless = true;
            }
        }
    }

    if params.is_unbounded() {
        warn!("Neither --steps nor --max-time is set; running until the process is stopped");
    }
    info!(
        "Starting simulation of {} (step limit: {}, time limit: {} s, viewer: {})",
        asset.display(),
        params.step_limit,
        params.max_seconds,
        if viewer.is_active() { "on" } else { "off" }
    );

    let start = Instant::now();
    let mut steps: u64 = 0;
    loop {
        engine.step(&model, &mut state)?;
        steps += 1;

        if !headless && !viewer.sync(&model, &state) {
            headless = true;
        }

        if steps % PROGRESS_INTERVAL == 0 {
            debug!(
                "Simulation step {} complete after {:.3} s",
                steps,
                start.elapsed().as_secs_f64()
            );
        }

        if params.should_stop(steps, start.elapsed()) {
            break;
        }
    }

    viewer.teardown();

    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "Simulation loop finished after {} steps in {:.3} s ({:.0} steps/s{})",
        steps,
        elapsed,
        steps as f64 / elapsed.max(f64::EPSILON),
        if headless && !params.headless { ", viewer dropped" } else { "" }
    );

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(step_limit: u64, max_seconds: f64) -> RunParameters {
        RunParameters {
            headless: true,
            step_limit,
            max_seconds,
        }
    }

    #[test]
    fn step_limit_alone() {
        let p = params(10, 0.0);
        assert!(!p.should_stop(9, Duration::from_secs(1000)));
        assert!(p.should_stop(10, Duration::ZERO));
    }

    #[test]
    fn time_limit_alone() {
        let p = params(0, 0.1);
        assert!(!p.should_stop(1_000_000, Duration::from_millis(99)));
        assert!(p.should_stop(1, Duration::from_millis(100)));
    }

    #[test]
    fn first_limit_reached_wins() {
        let p = params(10, 0.5);
        assert!(p.should_stop(10, Duration::from_millis(1)));
        assert!(p.should_stop(3, Duration::from_millis(500)));
        assert!(!p.should_stop(3, Duration::from_millis(1)));
    }

    #[test]
    fn zero_limits_never_stop() {
        let p = params(0, 0.0);
        assert!(p.is_unbounded());
        assert!(!p.should_stop(u64::MAX, Duration::from_secs(u64::MAX / 2)));
    }

    #[test]
    fn defaults_follow_cli() {
        let p = RunParameters::default();
        assert!(!p.headless);
        assert_eq!(p.step_limit, 0);
        assert!((p.max_seconds - 5.0).abs() < f64::EPSILON);
        assert!(!p.is_unbounded());
    }
}
