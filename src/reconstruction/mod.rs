//! Reconstruction runs: configuration, validation, the sliding-window
//! driver and the finishing step.

pub mod config;
mod driver;
mod finish;
mod profile;

pub use config::{Config, Regime};
pub use driver::Reconstructor;
pub use finish::{Finished, ForwardCheck, Reconstruction};
pub use profile::{Profile, Region, SampleRange};
pub use crate::transform::Direction;

