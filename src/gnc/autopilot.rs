use crate::dynamics::state::{ControlState, LanderState};
use crate::gnc::attitude;

// ---------------------------------------------------------------------------
// Descent autopilot: altitude / descent-rate throttle law
// ---------------------------------------------------------------------------

/// Closed-loop throttle controller for powered descent.
///
/// Drives the radial velocity toward -(descent_bias + k_h * altitude), so
/// the commanded descent rate tightens as the surface approaches and
/// bottoms out near `descent_bias` at touchdown.
#[derive(Debug, Clone)]
pub struct Autopilot {
    pub k_h: f64,          // altitude gain, (m/s)/m
    pub k_p: f64,          // proportional gain
    pub hover_offset: f64, // throttle offset that roughly cancels weight
    pub descent_bias: f64, // target touchdown descent rate, m/s
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            k_h: 0.035,
            k_p: 10.0,
            hover_offset: 0.4,
            descent_bias: 0.5,
        }
    }
}

impl Autopilot {
    /// Throttle command in [0, 1] from altitude and radial velocity.
    pub fn throttle_command(&self, state: &LanderState) -> f64 {
        let error = -(self.descent_bias + self.k_h * state.altitude() + state.radial_velocity());
        let p = self.k_p * error;

        // Monotonic clamp of hover_offset + p into [0, 1]. Two explicit
        // range checks: the branches are mutually exclusive and together
        // cover the whole real line.
        if p <= -self.hover_offset {
            0.0
        } else if p < 1.0 - self.hover_offset {
            self.hover_offset + p
        } else {
            1.0
        }
    }

    /// One autopilot pass: hold attitude, then write the throttle command.
    pub fn update(&self, state: &mut LanderState, control: &mut ControlState) {
        attitude::stabilize(state);
        control.throttle = self.throttle_command(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::MARS_RADIUS;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    /// State at zero altitude with a chosen radial velocity, so that
    /// p = -k_p * (descent_bias + radial_velocity).
    fn surface_state(radial_velocity: f64) -> LanderState {
        LanderState::new(
            Vector3::new(MARS_RADIUS, 0.0, 0.0),
            Vector3::new(radial_velocity, 0.0, 0.0),
            Vector3::zeros(),
        )
    }

    #[test]
    fn clamp_low_branch() {
        // radial velocity -0.4 -> e = -0.1 -> p = -1 <= -0.4
        let throttle = Autopilot::default().throttle_command(&surface_state(-0.4));
        assert_eq!(throttle, 0.0);
    }

    #[test]
    fn clamp_linear_branch() {
        // radial velocity -0.53 -> e = 0.03 -> p = 0.3 -> throttle 0.7
        let throttle = Autopilot::default().throttle_command(&surface_state(-0.53));
        assert_relative_eq!(throttle, 0.7, max_relative = 1e-9);
    }

    #[test]
    fn clamp_high_branch() {
        // radial velocity -1.5 -> e = 1.0 -> p = 10 >= 0.6
        let throttle = Autopilot::default().throttle_command(&surface_state(-1.5));
        assert_eq!(throttle, 1.0);
    }

    #[test]
    fn throttle_always_in_unit_range() {
        let ap = Autopilot::default();
        for alt_step in 0..40 {
            for vr_step in -40..40 {
                let altitude = alt_step as f64 * 500.0;
                let radial_velocity = vr_step as f64 * 25.0;
                let state = LanderState::new(
                    Vector3::new(MARS_RADIUS + altitude, 0.0, 0.0),
                    Vector3::new(radial_velocity, 0.0, 0.0),
                    Vector3::zeros(),
                );
                let throttle = ap.throttle_command(&state);
                assert!(
                    (0.0..=1.0).contains(&throttle),
                    "throttle {} out of range at h={} vr={}",
                    throttle,
                    altitude,
                    radial_velocity
                );
            }
        }
    }

    #[test]
    fn faster_descent_commands_more_throttle() {
        // Throttle is non-decreasing as descent rate grows
        let ap = Autopilot::default();
        let mut last = 0.0;
        for vr_step in 0..60 {
            let state = surface_state(-(vr_step as f64) * 0.02);
            let throttle = ap.throttle_command(&state);
            assert!(throttle >= last, "throttle must not drop as descent speeds up");
            last = throttle;
        }
    }

    #[test]
    fn update_stabilizes_and_writes_throttle() {
        let mut state = LanderState::new(
            Vector3::new(0.0, -(MARS_RADIUS + 100.0), 0.0),
            Vector3::new(0.0, 30.0, 0.0), // descending at 30 m/s
            Vector3::new(45.0, 45.0, 45.0),
        );
        let mut control = ControlState {
            throttle: 0.0,
            parachute: crate::dynamics::state::ParachuteStatus::NotDeployed,
            autopilot_enabled: true,
            stabilized_attitude: true,
        };
        Autopilot::default().update(&mut state, &mut control);

        // Descending far faster than commanded: full throttle, attitude radial
        assert_eq!(control.throttle, 1.0);
        let f = crate::physics::thrust::thrust_wrt_world(&state.orientation, 1.0);
        assert!(f.dot(&state.pos) > 0.0, "thrust should point outward after stabilization");
    }
}
