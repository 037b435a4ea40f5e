//! End-to-end inference tests, organized by payload kind.

pub mod array_payloads;
pub mod object_payloads;
pub mod property_tests;
pub mod text_and_scalar_payloads;
