//! Helpers shared by unit and integration tests.

pub mod app_builder;

pub use app_builder::{create_test_app_builder, TestAppBuilder};

use crate::error::AppError;
use crate::state::{build_state, AppState};

/// Default state for tests: in-memory repo, default cache settings, no sweeper task.
pub async fn test_state() -> Result<AppState, AppError> {
    build_state().without_sweeper().build().await
}
