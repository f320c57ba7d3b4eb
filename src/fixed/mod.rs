pub mod types;
pub mod table;
mod core;
pub mod complex;
pub mod magnitude;

pub use self::core::{bit_reverse, bit_reverse_permute};
pub use complex::{ScaledFft, transform};
pub use table::TwiddleTable;
pub use types::ScaledComplex;
