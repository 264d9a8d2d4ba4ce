//! HTTP API module for the Overtime Engine.
//!
//! This module provides the REST API endpoints for classifying days,
//! managing stored entries and summarizing payslip periods.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntryRequest, SummarizeRequest};
pub use response::{ApiError, ApiErrorResponse, ClassifyResponse, ClearResponse};
pub use state::AppState;
