//! Session manager integration tests

mod end_to_end_tests;
mod record_operation_tests;
