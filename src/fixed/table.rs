// src/fixed/table.rs

use super::types::ScaledComplex;
use crate::common::{FftError, checked_log2};
use core::f64::consts::PI;
use log::debug;

/// Largest supported base size is `2^MAX_BASE_BITS`, so every entry
/// (amplitude included) fits in an `i32`.
pub const MAX_BASE_BITS: u32 = 30;

/// Cosine lookup table scaled by its own base size.
///
/// Entry `i` holds `round(A * cos(-2πi / A))` for a power-of-two base size
/// `A`. Sine values come out of the same table a quarter period later,
/// since `cos(θ + π/2) = -sin(θ)` gives exactly the imaginary part of the
/// forward twiddle `e^{-iθ}`.
///
/// The table borrows caller-provided storage and never allocates. It is
/// read-only once built, so any number of transforms can share it.
#[derive(Debug)]
pub struct TwiddleTable<'a> {
    cosines: &'a [i32],
    base: usize,
    bits: u32,
}

impl<'a> TwiddleTable<'a> {
    /// Number of storage entries needed for a table of base size `base`.
    pub const fn required_len(base: usize) -> usize {
        base
    }

    /// Builds the table for base size `base` into `storage`.
    ///
    /// `base` is also the table amplitude and bounds the transform sizes the
    /// table can serve. Only the first `base` entries of `storage` are used.
    pub fn new(storage: &'a mut [i32], base: usize) -> Result<Self, FftError> {
        let bits = check_base(base)?;
        if storage.len() < Self::required_len(base) {
            return Err(FftError::BufferTooSmall);
        }

        let cosines = &mut storage[..base];
        precompute_cosines(cosines, base);
        debug!("twiddle table built: base size {}, amplitude 2^{}", base, bits);

        Ok(Self {
            cosines,
            base,
            bits,
        })
    }

    /// Wraps a table computed ahead of time, e.g. a `static` placed in flash.
    pub fn from_precomputed(cosines: &'a [i32], base: usize) -> Result<Self, FftError> {
        let bits = check_base(base)?;
        if cosines.len() < Self::required_len(base) {
            return Err(FftError::BufferTooSmall);
        }
        // Entry 0 is cos(0) at full amplitude.
        if cosines[0] as i64 != base as i64 {
            return Err(FftError::InvalidTable);
        }

        Ok(Self {
            cosines: &cosines[..base],
            base,
            bits,
        })
    }

    /// Base size `A`, which is also the table amplitude.
    #[inline]
    pub fn base_size(&self) -> usize {
        self.base
    }

    /// `log2(A)`: the shift that undoes one multiply by a table value.
    #[inline]
    pub fn amplitude_bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [i32] {
        self.cosines
    }

    /// Twiddle factor `z` of a `p`-point transform, scaled by `A`.
    ///
    /// Returns `(cos, sin)` as `(re, im)`: `table[step * z]` and the entry a
    /// quarter period later, with `step = A / p`. Indices are taken modulo
    /// `A`, so the sine of the last quarter wraps to the start of the table.
    /// `p` must divide `A`, and `A` must be at least 4: a 2-entry table has
    /// no quarter period and only serves 2-point transforms, which never
    /// look up a twiddle.
    ///
    /// # Panics
    /// Panics if `p` is zero (division by zero, in release builds too).
    #[inline]
    pub fn cos_lookup(&self, z: usize, p: usize) -> ScaledComplex {
        debug_assert!(self.base >= 4, "no twiddles in a {}-entry table", self.base);
        debug_assert!(
            p == 0 || self.base.is_multiple_of(p),
            "{} does not divide {}",
            p,
            self.base
        );

        let mask = self.base - 1;
        let index = (self.base / p) * z;
        let cos = self.cosines[index & mask];
        let sin = self.cosines[(index + (self.base >> 2)) & mask];
        ScaledComplex::new(cos as i64, sin as i64)
    }

    /// Ends the table's use of its storage and hands the cosines back.
    pub fn release(self) -> &'a [i32] {
        debug!("twiddle table released: base size {}", self.base);
        self.cosines
    }
}

fn check_base(base: usize) -> Result<u32, FftError> {
    // A = 2 holds only cos(0) and cos(-π): enough for the 2-point transform.
    let bits = checked_log2(base, 2)?;
    if bits > MAX_BASE_BITS {
        return Err(FftError::Overflow);
    }
    Ok(bits)
}

/// Fills `cosines` with `round(base * cos(-2πi / base))`.
fn precompute_cosines(cosines: &mut [i32], base: usize) {
    let amplitude = base as f64;
    for (i, entry) in cosines.iter_mut().enumerate() {
        let angle = -2.0 * PI * (i as f64) / amplitude;
        *entry = round(amplitude * cos(angle)) as i32;
    }
}

/// Agnostic helper for cos
fn cos(angle: f64) -> f64 {
    #[cfg(feature = "std")]
    return angle.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(angle);
}

/// Rounds half away from zero, in both configurations.
fn round(value: f64) -> f64 {
    #[cfg(feature = "std")]
    return value.round();

    #[cfg(not(feature = "std"))]
    return libm::round(value);
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
