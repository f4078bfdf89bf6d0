//! Unit tests for the scan-and-aggregate pipeline
//!
//! Each pipeline stage gets its own test module; folder-level tests build
//! throwaway log trees with tempfile.

pub mod aggregate_tests;
pub mod dispatcher_tests;
