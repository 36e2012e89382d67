//! Crate-level tests grouped by behavior

pub mod test_utils;

mod edge_case_tests;
mod timestamp_tests;
