//! Contact CRUD over per-user address books.

mod clock;
mod random;
mod resolver;
mod service;
mod uid;


pub use clock::SystemClock;
pub use random::OsRandom;
pub use resolver::{CollectionResolver, select_default};
pub use service::{ContactPage, ContactService};
pub use uid::generate_uid;
