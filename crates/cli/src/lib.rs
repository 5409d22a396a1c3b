//! Command-line entry point pieces for the address book gateway.

pub mod args;
pub mod config;
pub mod logging;
