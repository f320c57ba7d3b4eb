// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    SizeTooSmall,
    BufferTooSmall,
    TableTooSmall,
    InvalidTable,
    NonZeroImaginary,
    Overflow,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::SizeTooSmall => write!(f, "Size is below the supported minimum"),
            FftError::BufferTooSmall => write!(f, "Auxiliary buffers are too small"),
            FftError::TableTooSmall => write!(f, "FFT size exceeds the twiddle table base size"),
            FftError::InvalidTable => write!(f, "Precomputed table does not match its base size"),
            FftError::NonZeroImaginary => {
                write!(f, "Real-input transform requires an all-zero imaginary buffer")
            }
            FftError::Overflow => write!(f, "Configuration exceeds the available integer width"),
        }
    }
}

/// In-place transform of an interleaved buffer.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T]) -> Result<(), FftError>;
}

/// Checks that `n` is a usable power-of-two size and returns `log2(n)`.
pub(crate) fn checked_log2(n: usize, min: usize) -> Result<u32, FftError> {
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    if n < min {
        return Err(FftError::SizeTooSmall);
    }
    Ok(n.trailing_zeros())
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_checked_log2() {
        assert_eq!(checked_log2(2, 2), Ok(1));
        assert_eq!(checked_log2(1024, 4), Ok(10));
        assert_eq!(checked_log2(2, 4), Err(FftError::SizeTooSmall));
        assert_eq!(checked_log2(0, 2), Err(FftError::NotPowerOfTwo));
        assert_eq!(checked_log2(12, 2), Err(FftError::NotPowerOfTwo));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FftError::NotPowerOfTwo), "Size must be a power of 2");
        assert_eq!(
            format!("{}", FftError::TableTooSmall),
            "FFT size exceeds the twiddle table base size"
        );
    }
}
