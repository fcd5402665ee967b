//! Form rendering

mod estimate_form;
mod field_renderer;

pub use estimate_form::draw_estimate_form;
