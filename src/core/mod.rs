pub mod frame;
pub mod kinematics;
pub mod params;
pub mod timebase;
