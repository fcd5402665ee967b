//! Estimation domain module
//!
//! Pure input-normalization logic: select-field enums, derived-field
//! synthesis from the plot area, and pre-submission validation. No I/O
//! happens here; the API client consumes the validated output.

mod derive;
mod types;
mod validate;

pub use derive::*;
pub use types::*;
pub use validate::*;
