//! PostgreSQL storage backend.

use async_trait::async_trait;
use fedcard_core::backend::{AddressBookBackend, UserDirectory};
use fedcard_core::error::{BackendError, BackendResult};
use fedcard_core::types::{
    CardObject, Collection, CollectionId, CollectionProperties, User, principal_uri,
};
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::db::DbProvider;
use crate::db::connection::DbPool;
use crate::db::query::{self, etag::generate_etag};
use crate::error::{DbError, DbResult};
use crate::model::addressbook::NewAddressBook;
use crate::model::card::{CardContentUpdate, NewCard};
use crate::model::user::NewAppUser;

/// Address books and users stored in PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// ## Summary
    /// Registers the given user ids in the directory, skipping existing ones.
    ///
    /// ## Errors
    /// Returns an error if the database cannot be reached or the insert fails.
    #[tracing::instrument(skip(self, user_ids), fields(count = user_ids.len()))]
    pub async fn ensure_users(&self, user_ids: &[String]) -> DbResult<usize> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let principals: Vec<String> = user_ids.iter().map(|id| principal_uri(id)).collect();
        let rows: Vec<NewAppUser<'_>> = user_ids
            .iter()
            .zip(&principals)
            .map(|(user_id, principal)| NewAppUser {
                user_id,
                principal_uri: principal,
                display_name: None,
            })
            .collect();

        let mut conn = self.pool.get_connection().await?;
        let added = query::user::insert_missing_users(&mut conn, &rows).await?;

        tracing::info!(added, "Seeded directory users");
        Ok(added)
    }

    async fn load_users(&self) -> DbResult<Vec<User>> {
        let mut conn = self.pool.get_connection().await?;
        let rows = query::user::list_users(&mut conn).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl AddressBookBackend for PgStore {
    #[tracing::instrument(skip(self))]
    async fn list_collections_for_principal(
        &self,
        principal_uri: &str,
    ) -> BackendResult<Vec<Collection>> {
        let mut conn = self.pool.get_connection().await?;
        let rows = query::addressbook::list_for_principal(&mut conn, principal_uri)
            .await
            .map_err(DbError::from)?;

        Ok(rows.into_iter().map(Collection::from).collect())
    }

    #[tracing::instrument(skip(self, properties))]
    async fn create_collection(
        &self,
        principal_uri: &str,
        uri: &str,
        properties: &CollectionProperties,
    ) -> BackendResult<CollectionId> {
        let mut conn = self.pool.get_connection().await?;
        let new_addressbook = NewAddressBook {
            id: uuid::Uuid::now_v7(),
            principal_uri,
            uri,
            display_name: Some(properties.display_name.as_str()),
        };

        let row = query::addressbook::create_addressbook(&mut conn, &new_addressbook)
            .await
            .map_err(DbError::from)?;

        tracing::debug!(collection_id = %row.id, "Created address book");
        Ok(row.id)
    }

    #[tracing::instrument(skip(self))]
    async fn list_cards(&self, collection_id: CollectionId) -> BackendResult<Vec<CardObject>> {
        let mut conn = self.pool.get_connection().await?;
        let rows = query::card::list_cards(&mut conn, collection_id)
            .await
            .map_err(DbError::from)?;

        Ok(rows.into_iter().map(CardObject::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn get_card(
        &self,
        collection_id: CollectionId,
        name: &str,
    ) -> BackendResult<Option<CardObject>> {
        let mut conn = self.pool.get_connection().await?;
        let row = query::card::get_card(&mut conn, collection_id, name)
            .await
            .map_err(DbError::from)?;

        Ok(row.map(CardObject::from))
    }

    #[tracing::instrument(skip(self, data), fields(data_len = data.len()))]
    async fn create_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()> {
        let mut conn = self.pool.get_connection().await?;
        let etag = generate_etag(data.as_bytes());
        let new_card = NewCard {
            id: uuid::Uuid::now_v7(),
            addressbook_id: collection_id,
            uri: name,
            data,
            etag: &etag,
        };

        query::card::create_card(&mut conn, &new_card)
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    #[tracing::instrument(skip(self, data), fields(data_len = data.len()))]
    async fn update_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()> {
        let mut conn = self.pool.get_connection().await?;
        let etag = generate_etag(data.as_bytes());
        let update = CardContentUpdate {
            data,
            etag: &etag,
            last_modified: chrono::Utc::now(),
        };

        let updated = query::card::update_card(&mut conn, collection_id, name, &update)
            .await
            .map_err(DbError::from)?;

        if updated == 0 {
            return Err(DbError::NotFound(format!("card {name} in {collection_id}")).into());
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_card(&self, collection_id: CollectionId, name: &str) -> BackendResult<()> {
        let mut conn = self.pool.get_connection().await?;
        let deleted = query::card::delete_card(&mut conn, collection_id, name)
            .await
            .map_err(DbError::from)?;

        if deleted == 0 {
            return Err(DbError::NotFound(format!("card {name} in {collection_id}")).into());
        }

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for PgStore {
    #[tracing::instrument(skip(self))]
    async fn lookup(&self, user_id: &str) -> BackendResult<Option<User>> {
        let mut conn = self.pool.get_connection().await?;
        let row = query::user::get_user(&mut conn, user_id)
            .await
            .map_err(DbError::from)?;

        Ok(row.map(User::from))
    }

    fn users(&self) -> BoxStream<'_, BackendResult<User>> {
        stream::once(self.load_users())
            .map_err(BackendError::from)
            .map_ok(|users| stream::iter(users.into_iter().map(Ok::<_, BackendError>)))
            .try_flatten()
            .boxed()
    }
}
