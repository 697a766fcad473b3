pub mod dynamics;
pub mod gnc;
pub mod io;
pub mod physics;
pub mod sim;

// Curated re-exports for the common entry points
pub mod types {
    pub use crate::dynamics::state::{Clock, ControlState, LanderState, ParachuteStatus};
    pub use crate::sim::runner::{Sample, Simulation};
    pub use crate::sim::scenario::Scenario;
}
