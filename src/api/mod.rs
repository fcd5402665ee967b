//! HTTP client for the remote estimation service
//!
//! The entire wire contract of this program lives here: one JSON POST and
//! its request/response shapes. The `EstimatorClient` trait abstracts the
//! transport so the application shell can be tested with a mock.

mod client;
mod error;
mod traits;
mod types;

pub use client::*;
pub use error::*;
pub use traits::*;
pub use types::*;
