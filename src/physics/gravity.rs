use nalgebra::Vector3;

use crate::dynamics::state::GM_MARS;

/// Inverse-square gravitational acceleration about the planet centre (m/s^2).
///
/// `pos` is planet-centred Cartesian. A position at the centre has no
/// defined gravity direction and is a caller contract violation.
pub fn gravity_accel(pos: &Vector3<f64>) -> Vector3<f64> {
    let r = pos.norm();
    assert!(r > 0.0, "position at planet centre: gravity direction undefined");
    -GM_MARS / (r * r * r) * pos
}
