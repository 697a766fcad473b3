use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11; // m^3/(kg s^2)
pub const MARS_MASS: f64 = 6.42e23; // kg
pub const MARS_RADIUS: f64 = 3_386_000.0; // mean radius, m

/// Gravitational parameter GM of the planet, m^3/s^2.
pub const GM_MARS: f64 = GRAVITATIONAL_CONSTANT * MARS_MASS;

/// Altitude above which atmospheric density is zero, m.
pub const EXOSPHERE: f64 = 200_000.0;

pub const LANDER_SIZE: f64 = 1.0; // body radius, m
pub const LANDER_MASS: f64 = 200.0; // kg, fixed (no fuel-mass coupling)

pub const CD_LANDER: f64 = 1.0;
pub const LANDER_AREA: f64 = std::f64::consts::PI * LANDER_SIZE * LANDER_SIZE; // m^2

pub const CD_CHUTE: f64 = 2.0;
/// Effective chute area, m^2. The 1/2 dynamic-pressure factor is folded in
/// here, so the chute drag term uses the product CD_CHUTE * CHUTE_AREA
/// directly, without the 1/2 that the lander-body term carries.
pub const CHUTE_AREA: f64 = 10.0;

/// Maximum engine thrust, N: 1.5x the lander's weight at the surface.
pub const MAX_THRUST: f64 = 1.5 * LANDER_MASS * GM_MARS / (MARS_RADIUS * MARS_RADIUS);

/// Chute drag force above which deployment tears the canopy, N.
pub const MAX_PARACHUTE_DRAG: f64 = 20_000.0;
/// Airspeed above which in-atmosphere deployment is unsafe, m/s.
pub const MAX_PARACHUTE_SPEED: f64 = 500.0;

// ---------------------------------------------------------------------------
// Kinematic state
// ---------------------------------------------------------------------------

/// Lander pose at a single point in time.
/// Frame: planet-centred Cartesian, metres.
#[derive(Debug, Clone)]
pub struct LanderState {
    pub pos: Vector3<f64>,         // m
    pub vel: Vector3<f64>,         // m/s
    pub orientation: Vector3<f64>, // xyz Euler angles, degrees
}

impl LanderState {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>, orientation: Vector3<f64>) -> Self {
        Self { pos, vel, orientation }
    }

    /// Altitude above the mean surface, m.
    pub fn altitude(&self) -> f64 {
        self.pos.norm() - MARS_RADIUS
    }

    /// Velocity component along the outward radial, m/s. Positive = ascending.
    pub fn radial_velocity(&self) -> f64 {
        self.vel.dot(&self.pos.normalize())
    }
}

// ---------------------------------------------------------------------------
// Control state
// ---------------------------------------------------------------------------

/// Parachute lifecycle. The force model only reads this; deployment and
/// loss are commanded from outside the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParachuteStatus {
    NotDeployed,
    Deployed,
    Lost,
}

#[derive(Debug, Clone)]
pub struct ControlState {
    pub throttle: f64, // commanded fraction of MAX_THRUST, [0, 1]
    pub parachute: ParachuteStatus,
    pub autopilot_enabled: bool,
    pub stabilized_attitude: bool,
}

// ---------------------------------------------------------------------------
// Simulation clock
// ---------------------------------------------------------------------------

/// Elapsed time plus the fixed timestep, set once per run.
#[derive(Debug, Clone)]
pub struct Clock {
    pub time: f64,    // s
    pub delta_t: f64, // s
}

impl Clock {
    pub fn new(delta_t: f64) -> Self {
        assert!(delta_t > 0.0, "timestep must be positive, got {}", delta_t);
        Self { time: 0.0, delta_t }
    }
}
