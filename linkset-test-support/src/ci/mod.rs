//! Helpers that read CI-provided environment overrides.

pub mod property_test_profile;
