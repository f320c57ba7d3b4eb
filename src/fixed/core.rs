// src/fixed/core.rs

use super::table::TwiddleTable;
use super::types::ScaledComplex;
use num_complex::Complex;

/// Reverses the low `log2(n)` bits of `j`.
///
/// An involution and a bijection on `0..n` for any power-of-two `n`.
#[inline]
pub fn bit_reverse(j: usize, n: usize) -> usize {
    let bits = n.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    j.reverse_bits() >> (usize::BITS - bits)
}

/// Reorders `seq` in place into bit-reversed index order.
pub fn bit_reverse_permute<T>(seq: &mut [T]) {
    let n = seq.len();
    for i in 0..n {
        let j = bit_reverse(i, n);
        if i < j {
            seq.swap(i, j);
        }
    }
}

/// Random access to the taps of a sample buffer, widened for arithmetic.
pub(crate) trait Taps {
    fn load(&self, i: usize) -> ScaledComplex;
    fn store(&mut self, i: usize, value: ScaledComplex);
}

/// Separate real and imaginary sample arrays of equal length.
pub(crate) struct SplitTaps<'b> {
    pub re: &'b mut [i32],
    pub im: &'b mut [i32],
}

impl Taps for SplitTaps<'_> {
    #[inline(always)]
    fn load(&self, i: usize) -> ScaledComplex {
        ScaledComplex::from_parts(self.re[i], self.im[i])
    }

    #[inline(always)]
    fn store(&mut self, i: usize, value: ScaledComplex) {
        (self.re[i], self.im[i]) = value.to_parts();
    }
}

impl Taps for [Complex<i32>] {
    #[inline(always)]
    fn load(&self, i: usize) -> ScaledComplex {
        self[i].into()
    }

    #[inline(always)]
    fn store(&mut self, i: usize, value: ScaledComplex) {
        let (re, im) = value.to_parts();
        self[i] = Complex::new(re, im);
    }
}

/// One radix-2 butterfly: `odd` is rotated by `w`, shifted back down by
/// `shift` bits and combined with `even`.
#[inline(always)]
fn butterfly<T: Taps + ?Sized>(
    taps: &mut T,
    even: usize,
    odd: usize,
    w: ScaledComplex,
    shift: u32,
) {
    let a = taps.load(even);
    let t = (taps.load(odd) * w).rescale(shift);
    taps.store(even, a + t);
    taps.store(odd, a - t);
}

/// Scaled-integer radix-2 Decimation-in-Time butterflies.
///
/// Expects the taps already in bit-reversed order and leaves the spectrum
/// in natural order. The output is unnormalised: an impulse of height `K`
/// becomes a flat spectrum of height `K` and a constant `K` becomes `N*K`
/// in bin 0.
///
/// Stage 0 combines neighbours with the identity twiddle. Every later stage
/// walks even positions and runs two butterflies per step, `(i, i + 2k)` and
/// `(i + 1, i + 1 + 2k)`, skipping the odd half of a group once `k` steps
/// of it are done. The twiddle index `z` runs `0..p` within a group and
/// wraps when it reaches `p`.
///
/// Each twiddle product is shifted right by the table's amplitude bits.
/// This is the only precision loss: the shift floors, so every product
/// loses less than one unit per stage. Sums and differences are never
/// renormalised; values grow by up to `log2(n)` bits.
///
/// # Arguments
/// - `taps`: buffer of `n` samples
/// - `n`: transform size, a power of two no larger than the table base size
/// - `table`: cosine table whose amplitude sets the rescale shift
pub(crate) fn scaled_dit_fft_core<T: Taps + ?Sized>(
    taps: &mut T,
    n: usize,
    table: &TwiddleTable<'_>,
) {
    // 1. Stage 0, twiddle is 1
    for i in (0..n).step_by(2) {
        let a = taps.load(i);
        let b = taps.load(i + 1);
        taps.store(i, a + b);
        taps.store(i + 1, a - b);
    }

    // 2. General stages
    let shift = table.amplitude_bits();
    let stages = n.trailing_zeros();
    let mut k = 1;
    let mut p = 2;

    for _ in 1..stages {
        let k2 = k << 1;
        let mut m = 0;
        let mut z = 0;
        let mut i = 0;

        while i + 2 < n {
            if z == p {
                z = 0;
            }

            butterfly(taps, i, i + k2, table.cos_lookup(z, p << 1), shift);
            z += 1;

            butterfly(taps, i + 1, i + 1 + k2, table.cos_lookup(z, p << 1), shift);
            z += 1;

            m += 1;
            if m == k {
                i += k2;
                m = 0;
            }
            i += 2;
        }

        k <<= 1;
        p <<= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
