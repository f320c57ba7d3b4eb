// src/fixed/magnitude.rs
//! Integer spectrum magnitudes, so reading a spectrum needs no FPU either.

use crate::common::FftError;

/// Squared magnitude `re² + im²` of one bin.
#[inline]
pub fn power(re: i32, im: i32) -> u64 {
    let re = re.unsigned_abs() as u64;
    let im = im.unsigned_abs() as u64;
    re * re + im * im
}

/// Magnitude of one bin, rounded down to an integer.
#[inline]
pub fn magnitude(re: i32, im: i32) -> u32 {
    // sqrt(2 * (2^31)^2) < 2^32
    power(re, im).isqrt() as u32
}

/// Writes the magnitude of every bin of a spectrum into `out`.
pub fn magnitudes(re: &[i32], im: &[i32], out: &mut [u32]) -> Result<(), FftError> {
    if re.len() != im.len() {
        return Err(FftError::SizeMismatch);
    }
    if out.len() < re.len() {
        return Err(FftError::BufferTooSmall);
    }

    for ((dst, &r), &i) in out.iter_mut().zip(re).zip(im) {
        *dst = magnitude(r, i);
    }
    Ok(())
}
