use nalgebra::{Rotation3, Vector3};

use crate::dynamics::state::MAX_THRUST;

/// Resolve the commanded throttle into a world-frame thrust force (N).
///
/// The engine pushes along the lander's body +z axis; `orientation` holds
/// xyz Euler angles in degrees. Throttle is clamped to [0, 1].
pub fn thrust_wrt_world(orientation: &Vector3<f64>, throttle: f64) -> Vector3<f64> {
    let level = throttle.clamp(0.0, 1.0);
    if level == 0.0 {
        return Vector3::zeros();
    }
    let rot = Rotation3::from_euler_angles(
        orientation.x.to_radians(),
        orientation.y.to_radians(),
        orientation.z.to_radians(),
    );
    rot * Vector3::new(0.0, 0.0, level * MAX_THRUST)
}
