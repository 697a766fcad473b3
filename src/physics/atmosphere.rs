use nalgebra::Vector3;

use crate::dynamics::state::{EXOSPHERE, MARS_RADIUS};

// ---------------------------------------------------------------------------
// Exponential Mars atmosphere
// ---------------------------------------------------------------------------

const SURFACE_DENSITY: f64 = 0.017; // kg/m^3
const SCALE_HEIGHT: f64 = 11_000.0; // m

/// Atmospheric density at a planet-centred position (kg/m^3).
///
/// Exponential profile with an 11 km scale height; zero above the
/// exosphere boundary and below the mean surface.
pub fn density(pos: &Vector3<f64>) -> f64 {
    let alt = pos.norm() - MARS_RADIUS;
    if !(0.0..=EXOSPHERE).contains(&alt) {
        0.0
    } else {
        SURFACE_DENSITY * (-alt / SCALE_HEIGHT).exp()
    }
}
