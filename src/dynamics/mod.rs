pub mod forces;
pub mod state;

pub use forces::net_acceleration;
pub use state::{Clock, ControlState, LanderState, ParachuteStatus};
