//! Helpers shared by the lobby backend's integration test binaries:
//! one-time logging setup and problem-details assertions.

pub mod logging;
pub mod problem_details;
