//! fedcard contacts admin server - integration test support.
//!
//! This crate re-exports the workspace crates so the HTTP suites under
//! `tests/` can drive the full router against the in-memory backend.

pub mod component {
    pub use fedcard_core::{backend, constants, error, types};
    pub use fedcard_service::{auth, contacts};

    pub mod db {
        pub use fedcard_db::{MemoryStore, PgStore};
    }

    // Re-export config from both core and app
    pub mod config {
        pub use fedcard_app::config::ConfigHandler;
        pub use fedcard_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use fedcard_app::app::build_router;
    pub use fedcard_app::service_handler::ContactServiceHandler;

    pub mod api {
        pub use fedcard_app::app::api::*;
    }
}

pub use fedcard_rfc as rfc;
