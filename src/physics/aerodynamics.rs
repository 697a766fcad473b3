use nalgebra::Vector3;

use crate::dynamics::state::{CD_CHUTE, CD_LANDER, CHUTE_AREA, LANDER_AREA};
use crate::physics::atmosphere;

// ---------------------------------------------------------------------------
// Drag forces (N), opposing velocity
// ---------------------------------------------------------------------------

/// Quadratic drag on the lander body.
pub fn lander_drag(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Vector3<f64> {
    let speed = vel.norm();
    if speed > 1e-6 {
        -0.5 * atmosphere::density(pos) * CD_LANDER * LANDER_AREA * speed * vel
    } else {
        Vector3::zeros()
    }
}

/// Quadratic drag on the deployed parachute.
///
/// No 1/2 factor here: CHUTE_AREA is the effective area with the
/// dynamic-pressure half folded in. The asymmetry with `lander_drag`
/// is intentional.
pub fn chute_drag(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Vector3<f64> {
    let speed = vel.norm();
    if speed > 1e-6 {
        -atmosphere::density(pos) * CD_CHUTE * CHUTE_AREA * speed * vel
    } else {
        Vector3::zeros()
    }
}

/// Magnitude of the chute drag force at a given position and speed (N).
/// Used by the deployment safety check.
pub fn chute_drag_magnitude(pos: &Vector3<f64>, speed: f64) -> f64 {
    atmosphere::density(pos) * CD_CHUTE * CHUTE_AREA * speed * speed
}
