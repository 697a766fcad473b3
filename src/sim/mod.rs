pub mod integrator;
pub mod runner;
pub mod scenario;

pub use integrator::Integrator;
pub use runner::{simulate, Sample, Simulation};
pub use scenario::Scenario;
