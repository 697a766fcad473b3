pub mod attitude;
pub mod autopilot;

pub use attitude::stabilize;
pub use autopilot::Autopilot;
