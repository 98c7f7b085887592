//! Storage backends for fedcard.
//!
//! [`PgStore`] keeps address books in PostgreSQL through diesel-async.
//! [`MemoryStore`] keeps them in process and backs development and tests.
//! Both implement the backend traits from `fedcard_core::backend`.

pub mod db;
pub mod error;
pub mod memory;
pub mod model;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;
