//! # Ursinity Core Library
//!
//! Small helper utilities for real-time applications driven by a per-frame
//! update loop. The pieces are independent of each other and are meant to be
//! called directly from the host's tick or render code.
//!
//! ## Architecture
//!
//! - **Math**: degree/radian conversion and points on a circle
//! - **Storage**: filesystem helpers anchored at the persistent data
//!   directory, plus TOML-based configuration
//! - **Timer**: a monotonic stopwatch and a fixed-duration timer built on it
//!
//! ## Key Components
//!
//! - [`DurationTimer`]: fixed-duration timer with check-and-restart
//! - [`Stopwatch`]: start/stop/reset elapsed-time accumulator
//! - [`files`]: file helpers with explicit and sentinel-returning forms
//! - [`Config`]: application configuration management

pub mod error;
pub mod math;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, FileError};
pub use math::{point_on_circle, to_degrees, to_radians, AngleExt, CircleExt};
pub use storage::{
    ensure_persistent_data_dir, files, persistent_data_dir, persistent_path, Config,
    FileMetadata,
};
pub use timer::{
    Clock, DurationTimer, ManualClock, Stopwatch, SystemClock, TimerSnapshot, TimerState,
};

pub use glam::Vec2;
