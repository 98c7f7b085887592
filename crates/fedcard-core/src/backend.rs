//! Interfaces to the collaborators fedcard orchestrates.
//!
//! The address-book storage, the user directory, the random source and the
//! clock are all external. Every storage backend in `fedcard-db` implements these traits, and
//! the service layer only ever talks to them through trait objects.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use crate::error::BackendResult;
use crate::types::{CardObject, Collection, CollectionId, CollectionProperties, User};

/// Durable storage of address books and the cards inside them.
#[async_trait]
pub trait AddressBookBackend: Send + Sync {
    /// Lists a principal's collections in backend order.
    async fn list_collections_for_principal(
        &self,
        principal_uri: &str,
    ) -> BackendResult<Vec<Collection>>;

    /// Creates a collection and returns its newly assigned id.
    async fn create_collection(
        &self,
        principal_uri: &str,
        uri: &str,
        properties: &CollectionProperties,
    ) -> BackendResult<CollectionId>;

    /// Lists the cards of a collection in backend order.
    async fn list_cards(&self, collection_id: CollectionId) -> BackendResult<Vec<CardObject>>;

    async fn get_card(
        &self,
        collection_id: CollectionId,
        name: &str,
    ) -> BackendResult<Option<CardObject>>;

    async fn create_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()>;

    async fn update_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()>;

    async fn delete_card(&self, collection_id: CollectionId, name: &str) -> BackendResult<()>;
}

/// The set of users contacts can belong to.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup(&self, user_id: &str) -> BackendResult<Option<User>>;

    /// Produces every known user in directory order.
    fn users(&self) -> BoxStream<'_, BackendResult<User>>;
}

/// Source of cryptographically sound random bytes.
pub trait RandomSource: Send + Sync {
    /// ## Errors
    /// Returns an error if the source cannot produce `len` bytes.
    fn generate(&self, len: usize) -> BackendResult<Vec<u8>>;
}

/// Source of the revision timestamp written into every stored card.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
