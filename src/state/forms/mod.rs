//! Form state module

mod estimate_form;
mod field;

pub use estimate_form::*;
pub use field::*;
