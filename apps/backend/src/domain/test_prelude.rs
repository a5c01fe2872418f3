//! Shared test configuration for domain property tests.

pub use backend_test_support::proptest_prelude::proptest_config;
