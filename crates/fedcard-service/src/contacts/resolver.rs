use std::sync::Arc;

use fedcard_core::backend::AddressBookBackend;
use fedcard_core::constants::{DEFAULT_ADDRESSBOOK_DISPLAY_NAME, DEFAULT_ADDRESSBOOK_URI};
use fedcard_core::types::{Collection, CollectionId, CollectionProperties, principal_uri};

use crate::error::ServiceResult;

/// Finds the address book a user's new contacts go into.
#[derive(Clone)]
pub struct CollectionResolver {
    backend: Arc<dyn AddressBookBackend>,
}

impl CollectionResolver {
    #[must_use]
    pub fn new(backend: Arc<dyn AddressBookBackend>) -> Self {
        Self { backend }
    }

    /// ## Summary
    /// Lists a user's address books in backend order.
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` if the listing fails.
    pub async fn list_for_user(&self, user_id: &str) -> ServiceResult<Vec<Collection>> {
        Ok(self
            .backend
            .list_collections_for_principal(&principal_uri(user_id))
            .await?)
    }

    /// ## Summary
    /// Returns the user's default address book, creating it if the user has none.
    ///
    /// The lookup and the creation are separate backend calls. Two concurrent
    /// calls for a user without address books may both try to create one; the
    /// backend decides what the second attempt does.
    ///
    /// ## Errors
    /// Returns `ServiceError::Backend` if listing or creating fails.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_or_create_default(&self, user_id: &str) -> ServiceResult<CollectionId> {
        let collections = self.list_for_user(user_id).await?;

        if let Some(id) = select_default(&collections) {
            return Ok(id);
        }

        let id = self
            .backend
            .create_collection(
                &principal_uri(user_id),
                DEFAULT_ADDRESSBOOK_URI,
                &CollectionProperties {
                    display_name: DEFAULT_ADDRESSBOOK_DISPLAY_NAME.to_string(),
                },
            )
            .await?;

        tracing::info!(collection_id = %id, "Created default address book");
        Ok(id)
    }
}

/// ## Summary
/// Picks the address book named `contacts`, else the first one listed.
#[must_use]
pub fn select_default(collections: &[Collection]) -> Option<CollectionId> {
    collections
        .iter()
        .find(|c| c.uri == DEFAULT_ADDRESSBOOK_URI)
        .or_else(|| collections.first())
        .map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedcard_db::MemoryStore;

    fn collection(uri: &str) -> Collection {
        Collection {
            id: uuid::Uuid::now_v7(),
            uri: uri.to_string(),
            display_name: None,
        }
    }

    #[test]
    fn prefers_contacts_over_listing_order() {
        let work = collection("work");
        let contacts = collection("contacts");
        assert_eq!(
            select_default(&[work, contacts.clone()]),
            Some(contacts.id)
        );
    }

    #[test]
    fn falls_back_to_first_listed() {
        let first = collection("work");
        let second = collection("family");
        assert_eq!(select_default(&[first.clone(), second]), Some(first.id));
    }

    #[test]
    fn nothing_to_select_from_empty_listing() {
        assert_eq!(select_default(&[]), None);
    }

    #[test_log::test(tokio::test)]
    async fn resolving_twice_creates_one_collection() {
        let store = Arc::new(MemoryStore::new());
        let resolver = CollectionResolver::new(store.clone());

        let first = resolver.resolve_or_create_default("alice").await.unwrap();
        let second = resolver.resolve_or_create_default("alice").await.unwrap();

        assert_eq!(first, second);
        let listed = resolver.list_for_user("alice").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].uri, "contacts");
        assert_eq!(listed[0].display_name.as_deref(), Some("Contacts"));
    }

    #[tokio::test]
    async fn reuses_existing_non_default_collection() {
        let store = Arc::new(MemoryStore::new());
        let existing = store
            .create_collection(
                &principal_uri("bob"),
                "work",
                &CollectionProperties {
                    display_name: "Work".to_string(),
                },
            )
            .await
            .unwrap();
        let resolver = CollectionResolver::new(store.clone());

        assert_eq!(resolver.resolve_or_create_default("bob").await.unwrap(), existing);
        assert_eq!(store.addressbook_count().await, 1);
    }

    #[tokio::test]
    async fn list_for_unknown_user_is_empty() {
        let resolver = CollectionResolver::new(Arc::new(MemoryStore::new()));
        assert!(resolver.list_for_user("nobody").await.unwrap().is_empty());
    }
}
