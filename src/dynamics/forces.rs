use nalgebra::Vector3;

use crate::dynamics::state::{ControlState, LanderState, ParachuteStatus, LANDER_MASS};
use crate::physics::{aerodynamics, gravity, thrust};

// ---------------------------------------------------------------------------
// Force model
// ---------------------------------------------------------------------------

/// Net acceleration on the lander for the current state and control inputs
/// (m/s^2).
///
/// Forces modeled:
///   1. Gravity — inverse-square, planet-centred
///   2. Thrust  — throttle fraction of MAX_THRUST along the body +z axis
///   3. Drag    — quadratic lander-body drag, plus parachute drag while
///                the chute is deployed
///
/// Pure function of its inputs; the vehicle mass is fixed.
pub fn net_acceleration(state: &LanderState, control: &ControlState) -> Vector3<f64> {
    let mut force = thrust::thrust_wrt_world(&state.orientation, control.throttle)
        + aerodynamics::lander_drag(&state.pos, &state.vel);
    if control.parachute == ParachuteStatus::Deployed {
        force += aerodynamics::chute_drag(&state.pos, &state.vel);
    }
    force / LANDER_MASS + gravity::gravity_accel(&state.pos)
}
