//! Trait abstraction for the estimator client to enable mocking in tests

use super::{ApiError, EstimateRequest, EstimateResponse};
use async_trait::async_trait;

/// Trait for estimation-service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EstimatorClient: Send + Sync {
    /// POST the normalized form and return the parsed estimate
    async fn fetch_estimate(
        &self,
        request: &EstimateRequest,
    ) -> Result<EstimateResponse, ApiError>;
}
