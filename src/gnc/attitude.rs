use nalgebra::{Rotation3, Vector3};

use crate::dynamics::state::LanderState;

// ---------------------------------------------------------------------------
// Three-axis attitude stabilization
// ---------------------------------------------------------------------------

/// Snap the orientation so the thrust axis (body +z) lies along the
/// outward radial, base toward the surface.
///
/// Builds an orthonormal basis from the radial and a horizontal reference
/// axis, then decomposes it back into the xyz Euler angles the thrust
/// resolution consumes.
pub fn stabilize(state: &mut LanderState) {
    let up = state.pos.normalize();

    // Reference axis perpendicular to the radial; the horizontal choice
    // degenerates over the poles, where any perpendicular will do
    let mut left = Vector3::new(-up.y, up.x, 0.0);
    if left.norm() < 1e-9 {
        left = Vector3::new(-up.z, 0.0, up.x);
    }
    let left = left.normalize();
    let out = left.cross(&up);

    let rot = Rotation3::from_basis_unchecked(&[out, left, up]);
    let (rx, ry, rz) = rot.euler_angles();
    state.orientation = Vector3::new(rx.to_degrees(), ry.to_degrees(), rz.to_degrees());
}
