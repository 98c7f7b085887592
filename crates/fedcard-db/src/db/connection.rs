use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use fedcard_core::config::DatabaseConfig;

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// How long a request waits for a free connection before the store reports
/// itself unavailable.
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// ## Summary
/// Builds the bb8 pool the Postgres contact store draws connections from.
///
/// ## Errors
/// Returns an error if the initial connection to `database.url` fails.
#[tracing::instrument(skip(database), fields(pool_size = database.max_connections))]
pub async fn create_pool(database: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let size = u32::from(database.max_connections.max(1));
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&database.url);

    let pool = Pool::builder()
        .max_size(size)
        .min_idle(Some(1))
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager)
        .await?;

    tracing::info!(pool_size = size, "Contact store pool ready");

    Ok(pool)
}

impl DbProvider for DbPool {
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        Box::pin(async move { Ok(self.get().await?) })
    }
}
