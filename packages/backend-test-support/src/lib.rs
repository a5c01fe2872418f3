//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: quiet, idempotent
//! tracing initialisation and the project-wide proptest configuration.

pub mod proptest_prelude;
pub mod test_logging;
