//! Row types for the PostgreSQL backend.

pub mod addressbook;
pub mod card;
pub mod user;
