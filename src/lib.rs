#![no_std]

// Links the standard library for unit tests and for the default "std"
// feature (native float math for the table, `std::error::Error`).
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod config;
pub mod fixed;

pub use common::{FftError, FftProcess};
pub use config::FftConfig;
pub use fixed::{ScaledComplex, ScaledFft, TwiddleTable, transform};
