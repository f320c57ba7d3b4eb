// src/config.rs

use crate::common::{FftError, checked_log2};
use crate::fixed::TwiddleTable;
use log::warn;

/// Magnitude bits available to a transformed sample.
/// One bit below `i32`'s 31 is kept free for twiddle rounding growth.
pub const OUTPUT_BITS: u32 = 30;

/// Magnitude bits available to a twiddle product before it is rescaled.
/// The sum of two `i64` products needs one extra bit.
pub const ACCUMULATOR_BITS: u32 = 62;

/// Default input width: signed 16-bit samples (ADC words, PCM).
pub const DEFAULT_SAMPLE_BITS: u32 = 15;

/// Size and input width of a transform plan.
///
/// `sample_bits` is the number of magnitude bits in the input. Samples are
/// two's complement, so every one must satisfy
/// `-2^sample_bits <= x < 2^sample_bits` (15 bits is the full `i16` range).
/// A transform of size `N` grows values by up to `log2(N)` bits, and each
/// twiddle product adds the table's amplitude bits on top of that before the
/// rescale shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftConfig {
    size: usize,
    sample_bits: u32,
}

impl FftConfig {
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            sample_bits: DEFAULT_SAMPLE_BITS,
        }
    }

    pub const fn with_sample_bits(mut self, sample_bits: u32) -> Self {
        self.sample_bits = sample_bits;
        self
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn sample_bits(&self) -> u32 {
        self.sample_bits
    }

    /// Checks the configuration against the table it will run with.
    pub fn validate(&self, table: &TwiddleTable<'_>) -> Result<(), FftError> {
        let growth = checked_log2(self.size, 2)?;

        if self.size > table.base_size() {
            warn!(
                "fft size {} exceeds twiddle table base size {}",
                self.size,
                table.base_size()
            );
            return Err(FftError::TableTooSmall);
        }

        let output_bits = self.sample_bits + growth;
        if self.sample_bits == 0 || output_bits > OUTPUT_BITS {
            warn!(
                "{} sample bits + {} growth bits do not fit in {} output bits",
                self.sample_bits, growth, OUTPUT_BITS
            );
            return Err(FftError::Overflow);
        }

        // Holds for every table `TwiddleTable` accepts (amplitude <= 2^30).
        debug_assert!(output_bits + table.amplitude_bits() < ACCUMULATOR_BITS);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn test_default_sample_bits() {
        let config = FftConfig::new(128);
        assert_eq!(config.size(), 128);
        assert_eq!(config.sample_bits(), DEFAULT_SAMPLE_BITS);
        assert_eq!(config.with_sample_bits(8).sample_bits(), 8);
    }

    #[test]
    fn test_validate_against_table() {
        let mut storage = vec![0; 256];
        let table = TwiddleTable::new(&mut storage, 256).unwrap();

        assert_eq!(FftConfig::new(256).validate(&table), Ok(()));
        assert_eq!(FftConfig::new(2).validate(&table), Ok(()));
        assert_eq!(FftConfig::new(512).validate(&table), Err(FftError::TableTooSmall));
        assert_eq!(FftConfig::new(96).validate(&table), Err(FftError::NotPowerOfTwo));
        assert_eq!(FftConfig::new(1).validate(&table), Err(FftError::SizeTooSmall));
    }

    #[test]
    fn test_validate_output_headroom() {
        let mut storage = vec![0; 1024];
        let table = TwiddleTable::new(&mut storage, 1024).unwrap();

        // 20 + 10 bits is exactly the output budget
        assert_eq!(FftConfig::new(1024).with_sample_bits(20).validate(&table), Ok(()));
        assert_eq!(
            FftConfig::new(1024).with_sample_bits(21).validate(&table),
            Err(FftError::Overflow)
        );
        assert_eq!(
            FftConfig::new(1024).with_sample_bits(0).validate(&table),
            Err(FftError::Overflow)
        );
    }
}
