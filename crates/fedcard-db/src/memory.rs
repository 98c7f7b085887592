//! In-process storage backend.
//!
//! Keeps users, address books and cards in insertion order behind a single
//! `RwLock`. Nothing is persisted.

use async_trait::async_trait;
use fedcard_core::backend::{AddressBookBackend, UserDirectory};
use fedcard_core::error::{BackendError, BackendResult};
use fedcard_core::types::{CardObject, Collection, CollectionId, CollectionProperties, User};
use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::RwLock;

/// Address books and users held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    addressbooks: Vec<StoredAddressBook>,
}

#[derive(Debug)]
struct StoredAddressBook {
    principal_uri: String,
    collection: Collection,
    cards: Vec<CardObject>,
}

impl State {
    fn addressbook_mut(&mut self, id: CollectionId) -> BackendResult<&mut StoredAddressBook> {
        self.addressbooks
            .iter_mut()
            .find(|book| book.collection.id == id)
            .ok_or_else(|| BackendError::Storage(format!("address book {id} does not exist")))
    }

    fn addressbook(&self, id: CollectionId) -> BackendResult<&StoredAddressBook> {
        self.addressbooks
            .iter()
            .find(|book| book.collection.id == id)
            .ok_or_else(|| BackendError::Storage(format!("address book {id} does not exist")))
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Creates a store whose directory holds the given user ids, in order.
    ///
    /// Duplicate ids are kept once.
    #[must_use]
    pub fn with_users<I, S>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut users: Vec<User> = Vec::new();
        for user_id in user_ids {
            let user_id = user_id.into();
            if !users.iter().any(|u| u.user_id == user_id) {
                users.push(User::new(user_id));
            }
        }

        Self {
            state: RwLock::new(State {
                users,
                addressbooks: Vec::new(),
            }),
        }
    }

    /// ## Summary
    /// Adds a user to the directory. Returns `false` if the id already exists.
    pub async fn insert_user(&self, user: User) -> bool {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.user_id == user.user_id) {
            return false;
        }
        state.users.push(user);
        true
    }

    /// Number of address books across all principals.
    pub async fn addressbook_count(&self) -> usize {
        self.state.read().await.addressbooks.len()
    }
}

#[async_trait]
impl AddressBookBackend for MemoryStore {
    async fn list_collections_for_principal(
        &self,
        principal_uri: &str,
    ) -> BackendResult<Vec<Collection>> {
        let state = self.state.read().await;
        Ok(state
            .addressbooks
            .iter()
            .filter(|book| book.principal_uri == principal_uri)
            .map(|book| book.collection.clone())
            .collect())
    }

    #[tracing::instrument(skip(self, properties))]
    async fn create_collection(
        &self,
        principal_uri: &str,
        uri: &str,
        properties: &CollectionProperties,
    ) -> BackendResult<CollectionId> {
        let mut state = self.state.write().await;

        if state
            .addressbooks
            .iter()
            .any(|book| book.principal_uri == principal_uri && book.collection.uri == uri)
        {
            return Err(BackendError::Conflict(format!(
                "{principal_uri} already owns an address book named {uri}"
            )));
        }

        let id = uuid::Uuid::now_v7();
        state.addressbooks.push(StoredAddressBook {
            principal_uri: principal_uri.to_string(),
            collection: Collection {
                id,
                uri: uri.to_string(),
                display_name: Some(properties.display_name.clone()),
            },
            cards: Vec::new(),
        });

        tracing::debug!(collection_id = %id, "Created address book");
        Ok(id)
    }

    async fn list_cards(&self, collection_id: CollectionId) -> BackendResult<Vec<CardObject>> {
        let state = self.state.read().await;
        Ok(state.addressbook(collection_id)?.cards.clone())
    }

    async fn get_card(
        &self,
        collection_id: CollectionId,
        name: &str,
    ) -> BackendResult<Option<CardObject>> {
        let state = self.state.read().await;
        Ok(state
            .addressbook(collection_id)?
            .cards
            .iter()
            .find(|card| card.name == name)
            .cloned())
    }

    async fn create_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()> {
        let mut state = self.state.write().await;
        let book = state.addressbook_mut(collection_id)?;

        if book.cards.iter().any(|card| card.name == name) {
            return Err(BackendError::Conflict(format!(
                "card {name} already exists in {collection_id}"
            )));
        }

        book.cards.push(CardObject {
            name: name.to_string(),
            data: data.to_string(),
        });
        Ok(())
    }

    async fn update_card(
        &self,
        collection_id: CollectionId,
        name: &str,
        data: &str,
    ) -> BackendResult<()> {
        let mut state = self.state.write().await;
        let card = state
            .addressbook_mut(collection_id)?
            .cards
            .iter_mut()
            .find(|card| card.name == name)
            .ok_or_else(|| {
                BackendError::Storage(format!("card {name} does not exist in {collection_id}"))
            })?;

        data.clone_into(&mut card.data);
        Ok(())
    }

    async fn delete_card(&self, collection_id: CollectionId, name: &str) -> BackendResult<()> {
        let mut state = self.state.write().await;
        let book = state.addressbook_mut(collection_id)?;

        let before = book.cards.len();
        book.cards.retain(|card| card.name != name);

        if book.cards.len() == before {
            return Err(BackendError::Storage(format!(
                "card {name} does not exist in {collection_id}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn lookup(&self, user_id: &str) -> BackendResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    fn users(&self) -> BoxStream<'_, BackendResult<User>> {
        stream::once(async move { self.state.read().await.users.clone() })
            .flat_map(|users| stream::iter(users.into_iter().map(Ok::<_, BackendError>)))
            .boxed()
    }
}
