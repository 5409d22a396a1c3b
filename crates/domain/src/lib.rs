//! Domain layer for the address book gateway.
//!
//! This crate contains:
//! - The address book [`Record`](models::Record) model
//! - Static field-to-column declarations used to derive SQL

pub mod models;
