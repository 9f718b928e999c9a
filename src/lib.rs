#![no_std]

//! Diffraction correction of ring-occultation profiles.
//!
//! The crate inverts the Fresnel transform of a diffracted occultation
//! signal sample by sample. A [`reconstruction::Reconstructor`] walks the
//! requested radius range, keeps the tapering window in step with the
//! requested width and hands every output sample to one of the kernels in
//! [`transform`].

extern crate alloc;

// Tests always get the standard library, even with `--no-default-features`.
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod common;
pub mod diffraction;
pub mod fft;
pub mod kernel;
pub(crate) mod math;
pub mod reconstruction;
pub mod special;
pub mod transform;
pub mod window;

pub use common::{FftError, ReconstructionError, STATUS_OK};
pub use reconstruction::{
    Config, Direction, Finished, Profile, Reconstruction, Reconstructor, Regime, Region,
    SampleRange,
};
pub use window::WindowKind;
