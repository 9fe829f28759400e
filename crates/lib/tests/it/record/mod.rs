//! Record module integration tests

mod file_format_tests;
mod store_tests;
