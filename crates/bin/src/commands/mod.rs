//! Subcommand implementations.

pub mod account;
pub mod health;
pub mod info;
pub mod records;
pub mod serve;
