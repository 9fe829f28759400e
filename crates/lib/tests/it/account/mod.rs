//! Account module integration tests

mod store_tests;
