use nalgebra::Vector3;

use crate::dynamics::state::{Clock, LanderState};

// ---------------------------------------------------------------------------
// Fixed-timestep position integrator
// ---------------------------------------------------------------------------

/// Two-phase stepper: the first tick of a run has no position history, so
/// it bootstraps with a semi-implicit Euler step; every later tick uses
/// the two-step Störmer–Verlet recurrence against the saved previous
/// position.
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    prev_position: Option<Vector3<f64>>,
}

impl Integrator {
    pub fn new() -> Self {
        Self { prev_position: None }
    }

    /// Rebuild an integrator mid-run. Replaying from a snapshot needs the
    /// previous position as well as the current one; a single position is
    /// not enough once the bootstrap step has run.
    pub fn resume(prev_position: Vector3<f64>) -> Self {
        Self { prev_position: Some(prev_position) }
    }

    /// Position one tick in the past; `None` until the bootstrap step ran.
    pub fn prev_position(&self) -> Option<Vector3<f64>> {
        self.prev_position
    }

    /// Advance position, velocity and the clock by one timestep under the
    /// given acceleration, evaluated by the caller at the pre-update state.
    pub fn step(&mut self, state: &mut LanderState, clock: &mut Clock, accel: Vector3<f64>) {
        let dt = clock.delta_t;
        match self.prev_position {
            // Bootstrap: semi-implicit Euler
            None => {
                state.vel += dt * accel;
                let new_pos = state.pos + dt * state.vel;
                self.prev_position = Some(state.pos);
                state.pos = new_pos;
            }
            // Störmer–Verlet, with the forward-difference velocity estimate
            // (kept exactly as-is: trajectories are matched against it)
            Some(prev) => {
                let new_pos = 2.0 * state.pos - prev + dt * dt * accel;
                state.vel = (new_pos - state.pos) / dt;
                self.prev_position = Some(state.pos);
                state.pos = new_pos;
            }
        }
        clock.time += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::{MARS_RADIUS, GM_MARS};
    use crate::physics::gravity;
    use approx::assert_relative_eq;

    fn rest_state(altitude: f64) -> LanderState {
        LanderState::new(
            Vector3::new(0.0, 0.0, MARS_RADIUS + altitude),
            Vector3::zeros(),
            Vector3::zeros(),
        )
    }

    #[test]
    fn bootstrap_matches_semi_implicit_euler() {
        // One tick from rest under pure gravity
        let mut state = rest_state(300_000.0);
        let mut clock = Clock::new(0.1);
        let x0 = state.pos;
        let a = gravity::gravity_accel(&x0);

        let mut integrator = Integrator::new();
        integrator.step(&mut state, &mut clock, a);

        let v1 = 0.1 * a;
        let x1 = x0 + 0.1 * v1;
        assert_relative_eq!(state.vel, v1, max_relative = 1e-12);
        assert_relative_eq!(state.pos, x1, max_relative = 1e-12);
        assert_eq!(integrator.prev_position(), Some(x0));
        assert!((clock.time - 0.1).abs() < 1e-15);
    }

    #[test]
    fn steady_state_matches_verlet_recurrence() {
        let x_prev = Vector3::new(1.0e6, 2.0e6, 3.0e6);
        let x_n = Vector3::new(1.1e6, 2.1e6, 3.1e6);
        let a_n = Vector3::new(0.5, -1.5, 2.5);
        let dt = 0.01;

        let mut state = LanderState::new(x_n, Vector3::zeros(), Vector3::zeros());
        let mut clock = Clock::new(dt);
        clock.time = 5.0;

        let mut integrator = Integrator::resume(x_prev);
        integrator.step(&mut state, &mut clock, a_n);

        let expected_pos = 2.0 * x_n - x_prev + dt * dt * a_n;
        let expected_vel = (expected_pos - x_n) / dt;
        assert_relative_eq!(state.pos, expected_pos, max_relative = 1e-15);
        assert_relative_eq!(state.vel, expected_vel, max_relative = 1e-15);
        assert_eq!(integrator.prev_position(), Some(x_n));
    }

    #[test]
    fn steps_are_deterministic() {
        let run = || {
            let mut state = rest_state(50_000.0);
            let mut clock = Clock::new(0.05);
            let mut integrator = Integrator::new();
            for _ in 0..500 {
                let a = gravity::gravity_accel(&state.pos);
                integrator.step(&mut state, &mut clock, a);
            }
            (state.pos, state.vel, clock.time)
        };
        let (p1, v1, t1) = run();
        let (p2, v2, t2) = run();
        // bit-for-bit reproducible
        assert_eq!(p1, p2);
        assert_eq!(v1, v2);
        assert_eq!(t1, t2);
    }

    #[test]
    fn energy_stays_bounded_on_circular_orbit() {
        // Gravity-only circular orbit at 1.2 planet radii; Verlet is
        // symplectic, so mechanical energy must not drift over an orbit
        let r = 1.2 * MARS_RADIUS;
        let speed = (GM_MARS / r).sqrt();
        let mut state = LanderState::new(
            Vector3::new(r, 0.0, 0.0),
            Vector3::new(0.0, speed, 0.0),
            Vector3::zeros(),
        );
        let mut clock = Clock::new(0.1);
        let mut integrator = Integrator::new();

        let energy =
            |s: &LanderState| 0.5 * s.vel.norm_squared() - GM_MARS / s.pos.norm();
        let e0 = energy(&state);

        let period = 2.0 * std::f64::consts::PI * (r * r * r / GM_MARS).sqrt();
        let steps = (period / clock.delta_t) as usize;
        let mut max_drift = 0.0_f64;
        for _ in 0..steps {
            let a = gravity::gravity_accel(&state.pos);
            integrator.step(&mut state, &mut clock, a);
            max_drift = max_drift.max(((energy(&state) - e0) / e0).abs());
        }
        assert!(
            max_drift < 1e-3,
            "energy drifted by {:.2e} over one orbit",
            max_drift
        );
    }
}
