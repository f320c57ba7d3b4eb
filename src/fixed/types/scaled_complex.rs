use num_complex::Complex;

/// Complex value whose integer parts carry an implicit amplitude factor.
///
/// The factor is not stored in the value. Whoever multiplies two scaled
/// values owns the bookkeeping: the product carries both factors and has to
/// be brought back down with [`ScaledComplex::rescale`].
///
/// Parts are `i64` so the product of a grown `i32` sample and a table value
/// never overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaledComplex {
    pub re: i64,
    pub im: i64,
}

impl ScaledComplex {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(re: i64, im: i64) -> Self {
        Self { re, im }
    }

    /// Widens a pair of sample words.
    #[inline]
    pub const fn from_parts(re: i32, im: i32) -> Self {
        Self {
            re: re as i64,
            im: im as i64,
        }
    }

    /// Arithmetic (sign-extending) right shift of both parts.
    /// Rounds toward negative infinity, so `-1 >> s` stays `-1`.
    #[inline]
    pub const fn rescale(self, shift: u32) -> Self {
        Self {
            re: self.re >> shift,
            im: self.im >> shift,
        }
    }

    /// Narrows back to sample words. Both parts must fit in `i32`.
    #[inline]
    pub fn to_parts(self) -> (i32, i32) {
        debug_assert!(
            i32::try_from(self.re).is_ok() && i32::try_from(self.im).is_ok(),
            "scaled value {:?} does not fit the sample width",
            self
        );
        (self.re as i32, self.im as i32)
    }
}

use core::ops::{Add, AddAssign, Mul, Shr, Sub, SubAssign};

impl Add for ScaledComplex {
    type Output = ScaledComplex;

    #[inline]
    fn add(self, rhs: ScaledComplex) -> Self::Output {
        ScaledComplex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for ScaledComplex {
    #[inline]
    fn add_assign(&mut self, rhs: ScaledComplex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for ScaledComplex {
    type Output = ScaledComplex;

    #[inline]
    fn sub(self, rhs: ScaledComplex) -> Self::Output {
        ScaledComplex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for ScaledComplex {
    #[inline]
    fn sub_assign(&mut self, rhs: ScaledComplex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

// The scale of the product is the product of both scales.
impl Mul for ScaledComplex {
    type Output = ScaledComplex;

    #[inline]
    fn mul(self, rhs: ScaledComplex) -> Self::Output {
        // (ac - bd)
        let re = self.re * rhs.re - self.im * rhs.im;
        // (ad + bc)
        let im = self.re * rhs.im + self.im * rhs.re;

        ScaledComplex { re, im }
    }
}

impl Shr<u32> for ScaledComplex {
    type Output = ScaledComplex;

    #[inline]
    fn shr(self, shift: u32) -> Self::Output {
        self.rescale(shift)
    }
}

impl From<Complex<i32>> for ScaledComplex {
    #[inline]
    fn from(value: Complex<i32>) -> Self {
        Self::from_parts(value.re, value.im)
    }
}

impl From<Complex<i64>> for ScaledComplex {
    #[inline]
    fn from(value: Complex<i64>) -> Self {
        Self::new(value.re, value.im)
    }
}

impl From<ScaledComplex> for Complex<i64> {
    #[inline]
    fn from(value: ScaledComplex) -> Self {
        Complex::new(value.re, value.im)
    }
}
