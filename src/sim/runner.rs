use nalgebra::Vector3;

use crate::dynamics::forces;
use crate::dynamics::state::{
    Clock, ControlState, LanderState, ParachuteStatus, EXOSPHERE, MAX_PARACHUTE_DRAG,
    MAX_PARACHUTE_SPEED,
};
use crate::gnc::{attitude, Autopilot};
use crate::physics::aerodynamics;
use crate::sim::integrator::Integrator;
use crate::sim::scenario::Scenario;

// ---------------------------------------------------------------------------
// Tick driver
// ---------------------------------------------------------------------------

/// One lander run: kinematic state, control inputs, clock and integrator
/// history, advanced tick by tick. The driver is the single owner of the
/// mutation order; ticks are strictly serial.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: LanderState,
    pub control: ControlState,
    pub clock: Clock,
    pub autopilot: Autopilot,
    integrator: Integrator,
}

impl Simulation {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            state: scenario.initial_state(),
            control: scenario.initial_control(),
            clock: scenario.clock(),
            autopilot: Autopilot::default(),
            integrator: Integrator::new(),
        }
    }

    /// Advance one fixed timestep.
    ///
    /// Order per tick: autopilot (when enabled) writes this tick's
    /// throttle, the force model is evaluated at the pre-update state,
    /// the integrator advances position/velocity/time, and finally the
    /// attitude hold re-points the thrust axis for the next tick.
    pub fn tick(&mut self) {
        if self.control.autopilot_enabled {
            self.autopilot.update(&mut self.state, &mut self.control);
        }
        let accel = forces::net_acceleration(&self.state, &self.control);
        self.integrator.step(&mut self.state, &mut self.clock, accel);
        if self.control.stabilized_attitude {
            attitude::stabilize(&mut self.state);
        }
    }

    /// Whether opening the chute right now would survive: inside the
    /// atmosphere the airspeed must be under the canopy limit, and the
    /// resulting drag force under the tear limit.
    pub fn safe_to_deploy_parachute(&self) -> bool {
        let speed = self.state.vel.norm();
        let drag = aerodynamics::chute_drag_magnitude(&self.state.pos, speed);
        let in_atmosphere = self.state.altitude() < EXOSPHERE;
        drag <= MAX_PARACHUTE_DRAG && !(speed > MAX_PARACHUTE_SPEED && in_atmosphere)
    }

    /// Deploy the parachute if it is still stowed and deployment is safe.
    /// Returns whether the chute is now out.
    pub fn deploy_parachute(&mut self) -> bool {
        if self.control.parachute == ParachuteStatus::NotDeployed && self.safe_to_deploy_parachute()
        {
            self.control.parachute = ParachuteStatus::Deployed;
            true
        } else {
            false
        }
    }

    pub fn prev_position(&self) -> Option<Vector3<f64>> {
        self.integrator.prev_position()
    }
}

// ---------------------------------------------------------------------------
// Trajectory recording
// ---------------------------------------------------------------------------

/// Snapshot of one tick, as recorded by [`simulate`].
#[derive(Debug, Clone)]
pub struct Sample {
    pub time: f64,
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub throttle: f64,
}

impl Sample {
    fn of(sim: &Simulation) -> Self {
        Self {
            time: sim.clock.time,
            pos: sim.state.pos,
            vel: sim.state.vel,
            throttle: sim.control.throttle,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.pos.norm() - crate::dynamics::state::MARS_RADIUS
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Descent rate, m/s. Positive = losing altitude.
    pub fn descent_rate(&self) -> f64 {
        -self.vel.dot(&self.pos.normalize())
    }
}

/// Run a scenario for up to `max_time` simulated seconds, recording every
/// tick. There is no touchdown detection; callers pick their own cutoff.
pub fn simulate(scenario: &Scenario, max_time: f64) -> Vec<Sample> {
    let mut sim = Simulation::from_scenario(scenario);

    let capacity = (max_time / sim.clock.delta_t) as usize + 1;
    let mut trajectory = Vec::with_capacity(capacity.min(200_000));
    trajectory.push(Sample::of(&sim));

    while sim.clock.time < max_time {
        sim.tick();
        trajectory.push(Sample::of(&sim));
    }
    trajectory
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
