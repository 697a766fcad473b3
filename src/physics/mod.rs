pub mod aerodynamics;
pub mod atmosphere;
pub mod gravity;
pub mod thrust;

pub use atmosphere::density;
pub use gravity::gravity_accel;
pub use thrust::thrust_wrt_world;
