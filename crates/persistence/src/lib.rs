//! Persistence layer for the address book.
//!
//! This crate contains:
//! - Database connection management
//! - The dynamic filter builder
//! - Row mappings and the address book gateway

pub mod db;
pub mod entities;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod repositories;

pub use error::GatewayError;
pub use repositories::AddressBookRepository;
