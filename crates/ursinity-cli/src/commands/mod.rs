pub mod config;
pub mod files;
pub mod math;
pub mod timer;
