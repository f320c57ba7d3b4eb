mod scaled_complex;

pub use scaled_complex::ScaledComplex;
