//! Wires the configured storage backend into a [`ContactService`].

use std::sync::Arc;

use anyhow::Context;
use fedcard_core::config::{Settings, StorageBackend};
use fedcard_db::db::connection::create_pool;
use fedcard_db::db::migrate::run_migrations;
use fedcard_db::{MemoryStore, PgStore};
use fedcard_service::contacts::{ContactService, OsRandom};

/// ## Summary
/// Builds the contact service over the backend selected by `storage.backend`.
///
/// For `postgres` the pending migrations are applied and the users listed in
/// `storage.users` are registered before the pool is handed to the service.
///
/// ## Errors
/// Returns an error if the database section is missing, migrations fail or
/// the pool cannot be created.
pub async fn build_contact_service(settings: &Settings) -> anyhow::Result<Arc<ContactService>> {
    let service = match settings.storage.backend {
        StorageBackend::Memory => {
            let store = Arc::new(MemoryStore::with_users(settings.storage.users.iter().cloned()));
            tracing::info!(
                users = settings.storage.users.len(),
                "Using in-memory contact storage"
            );
            ContactService::new(store.clone(), store, Arc::new(OsRandom))
        }
        StorageBackend::Postgres => {
            let database = settings
                .database
                .as_ref()
                .context("storage.backend = postgres requires a [database] section")?;

            run_migrations(&database.url).await?;
            let pool = create_pool(database).await?;

            let store = Arc::new(PgStore::new(pool));
            let added = store.ensure_users(&settings.storage.users).await?;
            if added > 0 {
                tracing::info!(added, "Registered configured users");
            }

            ContactService::new(store.clone(), store, Arc::new(OsRandom))
        }
    };

    Ok(Arc::new(service))
}
