//! Repository implementations for database operations.

pub mod address_book;

pub use address_book::AddressBookRepository;
