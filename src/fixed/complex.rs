use super::core::{SplitTaps, bit_reverse_permute, scaled_dit_fft_core};
use super::table::TwiddleTable;
use crate::common::{FftError, FftProcess};
use crate::config::FftConfig;
use log::{debug, trace};
use num_complex::Complex;

/// Validated transform plan over a shared twiddle table.
///
/// The plan borrows the table; several plans (of any size up to the table's
/// base size) may borrow the same one. Sample buffers are supplied per call
/// and transformed in place.
#[derive(Debug)]
pub struct ScaledFft<'a> {
    table: &'a TwiddleTable<'a>,
    config: FftConfig,
}

impl<'a> ScaledFft<'a> {
    /// Plans an `n`-point transform of 16-bit samples.
    pub fn new(table: &'a TwiddleTable<'a>, n: usize) -> Result<Self, FftError> {
        Self::with_config(table, FftConfig::new(n))
    }

    pub fn with_config(table: &'a TwiddleTable<'a>, config: FftConfig) -> Result<Self, FftError> {
        config.validate(table)?;
        debug!(
            "planned {}-point fft: {} sample bits, table base size {}",
            config.size(),
            config.sample_bits(),
            table.base_size()
        );
        Ok(Self { table, config })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    #[inline]
    pub fn config(&self) -> FftConfig {
        self.config
    }

    /// Transforms a real signal in place.
    ///
    /// `re` holds the samples and `im` must be all zero; only `re` is
    /// bit-reverse permuted. On return both hold the spectrum in natural
    /// frequency order.
    pub fn process_real(&self, re: &mut [i32], im: &mut [i32]) -> Result<(), FftError> {
        self.check_len(re.len(), im.len())?;
        if im.iter().any(|&v| v != 0) {
            return Err(FftError::NonZeroImaginary);
        }
        self.debug_check_range(re);
        trace!("real fft, n = {}", self.size());

        bit_reverse_permute(re);
        scaled_dit_fft_core(&mut SplitTaps { re, im }, self.size(), self.table);
        Ok(())
    }

    /// Transforms a complex signal held as separate real and imaginary arrays.
    pub fn process_complex(&self, re: &mut [i32], im: &mut [i32]) -> Result<(), FftError> {
        self.check_len(re.len(), im.len())?;
        self.debug_check_range(re);
        self.debug_check_range(im);
        trace!("complex fft, n = {}", self.size());

        bit_reverse_permute(re);
        bit_reverse_permute(im);
        scaled_dit_fft_core(&mut SplitTaps { re, im }, self.size(), self.table);
        Ok(())
    }

    fn check_len(&self, re: usize, im: usize) -> Result<(), FftError> {
        if re != self.size() || im != self.size() {
            return Err(FftError::SizeMismatch);
        }
        Ok(())
    }

    #[inline]
    fn debug_check_range(&self, samples: &[i32]) {
        let limit = 1i64 << self.config.sample_bits();
        debug_assert!(
            samples.iter().all(|&v| (-limit..limit).contains(&(v as i64))),
            "sample exceeds the configured {} bits",
            self.config.sample_bits()
        );
    }
}

impl<'a> FftProcess<Complex<i32>> for ScaledFft<'a> {
    /// Transforms an interleaved complex buffer in place.
    fn process(&self, buffer: &mut [Complex<i32>]) -> Result<(), FftError> {
        if buffer.len() != self.size() {
            return Err(FftError::SizeMismatch);
        }
        trace!("interleaved fft, n = {}", self.size());

        bit_reverse_permute(buffer);
        scaled_dit_fft_core(buffer, self.size(), self.table);
        Ok(())
    }
}

/// One-shot real transform: validates `n` against `table`, then runs
/// [`ScaledFft::process_real`].
pub fn transform(
    re: &mut [i32],
    im: &mut [i32],
    n: usize,
    table: &TwiddleTable<'_>,
) -> Result<(), FftError> {
    ScaledFft::new(table, n)?.process_real(re, im)
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
