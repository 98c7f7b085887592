//! Domain types shared by the codec, the backends and the service layer.

use serde::{Deserialize, Serialize};

use crate::constants::{CARD_FILE_EXTENSION, PRINCIPAL_URI_PREFIX};

/// Identifier of an address book as assigned by the storage backend.
pub type CollectionId = uuid::Uuid;

/// ## Summary
/// Returns the storage principal URI owning a user's address books.
#[must_use]
pub fn principal_uri(user_id: &str) -> String {
    format!("{PRINCIPAL_URI_PREFIX}{user_id}")
}

/// ## Summary
/// Returns the card name a contact with `uid` is stored under.
#[must_use]
pub fn card_name(uid: &str) -> String {
    format!("{uid}.{CARD_FILE_EXTENSION}")
}

/// Caller-supplied contact fields, everything except identity and ownership.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFields {
    pub display_name: String,
    pub email: String,
    pub cloud_id: String,
    pub organization: Option<String>,
}

impl ContactFields {
    /// Creates a field set, collapsing an empty organization to `None`.
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        cloud_id: impl Into<String>,
        organization: Option<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            cloud_id: cloud_id.into(),
            organization: organization.filter(|org| !org.is_empty()),
        }
    }

    /// Collapses an empty organization to `None`, as deserialized input may carry one.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.organization = self.organization.filter(|org| !org.is_empty());
        self
    }

    /// ## Summary
    /// Returns the wire names of required fields that are empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("displayName", &self.display_name),
            ("email", &self.email),
            ("cloudId", &self.cloud_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// ## Summary
    /// Returns the wire names of fields holding a carriage return.
    ///
    /// Card text carries line breaks only as `\n`, so a CR cannot be stored
    /// without altering the value.
    #[must_use]
    pub fn fields_with_carriage_return(&self) -> Vec<&'static str> {
        [
            ("displayName", self.display_name.as_str()),
            ("email", self.email.as_str()),
            ("cloudId", self.cloud_id.as_str()),
            ("organization", self.organization.as_deref().unwrap_or_default()),
        ]
        .into_iter()
        .filter(|(_, value)| value.contains('\r'))
        .map(|(name, _)| name)
        .collect()
    }
}

/// A contact as returned to callers.
///
/// `user_id` and `address_book_id` describe where the card was found; they are
/// never written into the card itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub uid: String,
    #[serde(flatten)]
    pub fields: ContactFields,
    pub user_id: String,
    pub address_book_id: CollectionId,
}

/// An address book owned by one principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub id: CollectionId,
    /// Local name, unique per principal (e.g. `contacts`).
    pub uri: String,
    pub display_name: Option<String>,
}

/// Properties applied when creating a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionProperties {
    pub display_name: String,
}

/// A stored card blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardObject {
    pub name: String,
    pub data: String,
}

/// A user known to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub display_name: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: None,
        }
    }

    #[must_use]
    pub fn principal_uri(&self) -> String {
        principal_uri(&self.user_id)
    }
}
