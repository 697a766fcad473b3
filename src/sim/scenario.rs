use nalgebra::Vector3;

use crate::dynamics::state::{
    Clock, ControlState, LanderState, ParachuteStatus, EXOSPHERE, LANDER_SIZE, MARS_RADIUS,
};

// ---------------------------------------------------------------------------
// Initial-condition presets
// ---------------------------------------------------------------------------

/// Immutable initial-condition preset. Selecting one copies its fields
/// into fresh state; the preset itself is never mutated.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub description: &'static str,
    pub position: Vector3<f64>,    // m, planet-centred
    pub velocity: Vector3<f64>,    // m/s
    pub orientation: Vector3<f64>, // xyz Euler angles, degrees
    pub delta_t: f64,              // s
    pub parachute: ParachuteStatus,
    pub stabilized_attitude: bool,
    pub autopilot_enabled: bool,
}

impl Scenario {
    pub fn initial_state(&self) -> LanderState {
        LanderState::new(self.position, self.velocity, self.orientation)
    }

    pub fn initial_control(&self) -> ControlState {
        ControlState {
            throttle: 0.0,
            parachute: self.parachute,
            autopilot_enabled: self.autopilot_enabled,
            stabilized_attitude: self.stabilized_attitude,
        }
    }

    pub fn clock(&self) -> Clock {
        Clock::new(self.delta_t)
    }
}

/// The preset table. Index 9 is the reserved user-defined slot.
pub fn presets() -> Vec<Scenario> {
    vec![
        Scenario {
            description: "circular orbit",
            position: Vector3::new(1.2 * MARS_RADIUS, 0.0, 0.0),
            velocity: Vector3::new(0.0, -3247.087385863725, 0.0),
            orientation: Vector3::new(0.0, 90.0, 0.0),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: false,
            autopilot_enabled: false,
        },
        Scenario {
            description: "descent from 10km",
            position: Vector3::new(0.0, -(MARS_RADIUS + 10_000.0), 0.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: true,
        },
        Scenario {
            description: "elliptical orbit, thrust changes orbital plane",
            position: Vector3::new(0.0, 0.0, 1.2 * MARS_RADIUS),
            velocity: Vector3::new(3500.0, 0.0, 0.0),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: false,
            autopilot_enabled: false,
        },
        Scenario {
            description: "polar launch at escape velocity (but drag prevents escape)",
            position: Vector3::new(0.0, 0.0, MARS_RADIUS + LANDER_SIZE / 2.0),
            velocity: Vector3::new(0.0, 0.0, 5027.0),
            orientation: Vector3::zeros(),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: false,
            autopilot_enabled: false,
        },
        Scenario {
            description: "elliptical orbit that clips the atmosphere and decays",
            position: Vector3::new(0.0, 0.0, MARS_RADIUS + 100_000.0),
            velocity: Vector3::new(4000.0, 0.0, 0.0),
            orientation: Vector3::new(0.0, 90.0, 0.0),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: false,
            autopilot_enabled: false,
        },
        Scenario {
            description: "descent from 200km",
            position: Vector3::new(0.0, -(MARS_RADIUS + EXOSPHERE), 0.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: false,
        },
        Scenario {
            description: "descent from 500m",
            position: Vector3::new(0.0, -(MARS_RADIUS + 500.0), 0.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.01,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: true,
        },
        Scenario {
            description: "descent from 510m",
            position: Vector3::new(0.0, -(MARS_RADIUS + 510.0), 0.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.01,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: true,
        },
        Scenario {
            description: "descent from 700m",
            position: Vector3::new(0.0, -(MARS_RADIUS + 700.0), 0.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::new(0.0, 0.0, 90.0),
            delta_t: 0.01,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: true,
        },
        // Reserved user-defined slot: at rest on the pad
        Scenario {
            description: "",
            position: Vector3::new(0.0, 0.0, MARS_RADIUS + LANDER_SIZE / 2.0),
            velocity: Vector3::zeros(),
            orientation: Vector3::zeros(),
            delta_t: 0.1,
            parachute: ParachuteStatus::NotDeployed,
            stabilized_attitude: true,
            autopilot_enabled: false,
        },
    ]
}

/// Look up a preset by index. An out-of-range index is a caller bug.
pub fn preset(index: usize) -> Scenario {
    let mut all = presets();
    assert!(index < all.len(), "scenario index {} out of range", index);
    all.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_presets_with_descriptions() {
        let all = presets();
        assert_eq!(all.len(), 10);
        for (i, s) in all.iter().enumerate() {
            // only the reserved slot is unnamed
            assert_eq!(s.description.is_empty(), i == 9);
            assert!(s.delta_t > 0.0);
            assert!(s.position.norm() > 0.0);
        }
    }

    #[test]
    fn descent_from_500m_fields() {
        let s = preset(6);
        assert_eq!(s.description, "descent from 500m");
        assert!((s.position.norm() - (MARS_RADIUS + 500.0)).abs() < 1e-6);
        assert_eq!(s.velocity, Vector3::zeros());
        assert!((s.delta_t - 0.01).abs() < 1e-12);
        assert!(s.autopilot_enabled);
        assert!(s.stabilized_attitude);
        assert_eq!(s.parachute, ParachuteStatus::NotDeployed);
    }

    #[test]
    fn preset_initializes_fresh_state() {
        let s = preset(1);
        let state = s.initial_state();
        let control = s.initial_control();
        let clock = s.clock();
        assert_eq!(state.pos, s.position);
        assert_eq!(control.throttle, 0.0);
        assert!(control.autopilot_enabled);
        assert_eq!(clock.time, 0.0);
        assert!((clock.delta_t - s.delta_t).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_panics() {
        preset(10);
    }
}
