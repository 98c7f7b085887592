use std::sync::Arc;

use fedcard_core::backend::{AddressBookBackend, Clock, RandomSource, UserDirectory};
use fedcard_core::types::{Collection, CollectionId, ContactFields, ContactRecord, card_name};
use fedcard_rfc::card;
use futures::TryStreamExt;
use serde::Serialize;

use super::clock::SystemClock;
use super::resolver::CollectionResolver;
use super::uid::generate_uid;
use crate::error::{ServiceError, ServiceResult};

/// One page of a contact listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPage {
    pub contacts: Vec<ContactRecord>,
    /// Count of every decodable contact before pagination.
    pub total: usize,
}

/// Create, read, update, delete and list contacts across users' address books.
///
/// Holds no state of its own between calls; everything lives in the backend.
#[derive(Clone)]
pub struct ContactService {
    backend: Arc<dyn AddressBookBackend>,
    users: Arc<dyn UserDirectory>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    resolver: CollectionResolver,
}

impl ContactService {
    #[must_use]
    pub fn new(
        backend: Arc<dyn AddressBookBackend>,
        users: Arc<dyn UserDirectory>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let resolver = CollectionResolver::new(Arc::clone(&backend));
        Self {
            backend,
            users,
            random,
            clock: Arc::new(SystemClock),
            resolver,
        }
    }

    /// Replaces the wall clock used to stamp card revisions.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn resolver(&self) -> &CollectionResolver {
        &self.resolver
    }

    /// ## Summary
    /// Creates a contact in the user's default address book.
    ///
    /// The default address book is created on first use. Returns the fields as
    /// supplied together with the new uid.
    ///
    /// ## Errors
    /// - `Validation` if `user_id` or a required field is empty.
    /// - `UserNotFound` if the directory does not know `user_id`.
    /// - `Backend` if the directory, the storage or the random source fails.
    #[tracing::instrument(skip(self, fields))]
    pub async fn create(
        &self,
        user_id: &str,
        fields: ContactFields,
    ) -> ServiceResult<ContactRecord> {
        let result: ServiceResult<ContactRecord> = async {
            let fields = fields.normalized();
            require_fields(Some(user_id), &fields)?;

            if self.users.lookup(user_id).await?.is_none() {
                return Err(ServiceError::UserNotFound(user_id.to_string()));
            }

            let address_book_id = self.resolver.resolve_or_create_default(user_id).await?;
            let uid = generate_uid(self.random.as_ref())?;

            let data = card::encode_at(&uid, &fields, self.clock.now());
            self.backend
                .create_card(address_book_id, &card_name(&uid), &data)
                .await?;

            tracing::info!(%uid, %address_book_id, "Created contact");

            Ok(ContactRecord {
                uid,
                fields,
                user_id: user_id.to_string(),
                address_book_id,
            })
        }
        .await;

        log_fault("create", &result);
        result
    }

    /// ## Summary
    /// Lists contacts for one user, or for every directory user in directory
    /// order, then applies `offset` and `limit` to the combined sequence.
    ///
    /// Cards that fail to decode are skipped and do not count towards `total`.
    /// An offset past the end yields an empty page.
    ///
    /// ## Errors
    /// Returns `Backend` if the directory or the storage fails.
    #[tracing::instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Option<&str>,
        limit: usize,
        offset: usize,
    ) -> ServiceResult<ContactPage> {
        let result: ServiceResult<ContactPage> = async {
            let all = match user_id {
                Some(user_id) => self.collect_for_user(user_id).await?,
                None => {
                    let mut all = Vec::new();
                    let mut users = self.users.users();
                    while let Some(user) = users.try_next().await? {
                        all.extend(self.collect_for_user(&user.user_id).await?);
                    }
                    all
                }
            };

            let total = all.len();
            let contacts = all.into_iter().skip(offset).take(limit).collect();

            Ok(ContactPage { contacts, total })
        }
        .await;

        log_fault("list", &result);
        result
    }

    /// ## Summary
    /// Lists every decodable contact of a user, unpaginated.
    ///
    /// A user without address books or cards yields an empty list.
    ///
    /// ## Errors
    /// Returns `Backend` if the storage fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: &str) -> ServiceResult<Vec<ContactRecord>> {
        let result = self.collect_for_user(user_id).await;
        log_fault("list_for_user", &result);
        result
    }

    /// ## Summary
    /// Returns the contact stored as `uid` in the first of the user's address
    /// books that has it, or `None`.
    ///
    /// The user is not looked up in the directory; an unknown user simply has
    /// no contacts.
    ///
    /// ## Errors
    /// - `Decode` if the stored card cannot be parsed.
    /// - `Backend` if the storage fails.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, user_id: &str, uid: &str) -> ServiceResult<Option<ContactRecord>> {
        let result: ServiceResult<Option<ContactRecord>> = async {
            let Some((collection, data)) = self.locate(user_id, uid).await? else {
                return Ok(None);
            };

            let decoded = card::decode(&data).map_err(|source| ServiceError::Decode {
                name: card_name(uid),
                source,
            })?;

            Ok(Some(ContactRecord {
                uid: decoded.uid,
                fields: decoded.fields,
                user_id: user_id.to_string(),
                address_book_id: collection.id,
            }))
        }
        .await;

        log_fault("get", &result);
        result
    }

    /// ## Summary
    /// Replaces the contact stored as `uid` with a freshly encoded card that
    /// keeps the uid and gets a new revision timestamp.
    ///
    /// The existing card is overwritten without being decoded. Returns `None`
    /// if none of the user's address books holds `uid`.
    ///
    /// ## Errors
    /// - `Validation` if a required field is empty.
    /// - `Backend` if the storage fails.
    #[tracing::instrument(skip(self, fields))]
    pub async fn update(
        &self,
        user_id: &str,
        uid: &str,
        fields: ContactFields,
    ) -> ServiceResult<Option<ContactRecord>> {
        let result: ServiceResult<Option<ContactRecord>> = async {
            let fields = fields.normalized();
            require_fields(None, &fields)?;

            let Some((collection, _)) = self.locate(user_id, uid).await? else {
                return Ok(None);
            };

            let data = card::encode_at(uid, &fields, self.clock.now());
            self.backend
                .update_card(collection.id, &card_name(uid), &data)
                .await?;

            tracing::info!(address_book_id = %collection.id, "Updated contact");

            Ok(Some(ContactRecord {
                uid: uid.to_string(),
                fields,
                user_id: user_id.to_string(),
                address_book_id: collection.id,
            }))
        }
        .await;

        log_fault("update", &result);
        result
    }

    /// ## Summary
    /// Removes the contact stored as `uid`. Returns whether anything was removed.
    ///
    /// ## Errors
    /// Returns `Backend` if the storage fails.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user_id: &str, uid: &str) -> ServiceResult<bool> {
        let result: ServiceResult<bool> = async {
            let Some((collection, _)) = self.locate(user_id, uid).await? else {
                return Ok(false);
            };

            self.backend.delete_card(collection.id, &card_name(uid)).await?;

            tracing::info!(address_book_id = %collection.id, "Deleted contact");
            Ok(true)
        }
        .await;

        log_fault("delete", &result);
        result
    }

    /// Finds the first of the user's address books holding a card for `uid`.
    async fn locate(
        &self,
        user_id: &str,
        uid: &str,
    ) -> ServiceResult<Option<(Collection, String)>> {
        let name = card_name(uid);

        for collection in self.resolver.list_for_user(user_id).await? {
            if let Some(card) = self.backend.get_card(collection.id, &name).await? {
                return Ok(Some((collection, card.data)));
            }
        }

        Ok(None)
    }

    async fn collect_for_user(&self, user_id: &str) -> ServiceResult<Vec<ContactRecord>> {
        let mut records = Vec::new();

        for collection in self.resolver.list_for_user(user_id).await? {
            for stored in self.backend.list_cards(collection.id).await? {
                records.extend(decode_listed(
                    user_id,
                    collection.id,
                    &stored.name,
                    &stored.data,
                ));
            }
        }

        Ok(records)
    }
}

/// Decodes a card found while listing; a failure is logged and skipped.
fn decode_listed(
    user_id: &str,
    address_book_id: CollectionId,
    name: &str,
    data: &str,
) -> Option<ContactRecord> {
    match card::decode(data) {
        Ok(decoded) => Some(ContactRecord {
            uid: decoded.uid,
            fields: decoded.fields,
            user_id: user_id.to_string(),
            address_book_id,
        }),
        Err(err) => {
            tracing::warn!(
                %address_book_id,
                card = name,
                error = %err,
                "Skipping card that failed to decode"
            );
            None
        }
    }
}

fn require_fields(user_id: Option<&str>, fields: &ContactFields) -> ServiceResult<()> {
    let mut missing = Vec::new();
    if user_id.is_some_and(str::is_empty) {
        missing.push("userId");
    }
    missing.extend(fields.missing_fields());

    if !missing.is_empty() {
        return Err(ServiceError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let with_cr = fields.fields_with_carriage_return();
    if !with_cr.is_empty() {
        return Err(ServiceError::Validation(format!(
            "carriage returns are not allowed in: {}",
            with_cr.join(", ")
        )));
    }

    Ok(())
}

/// Records server-side failures within the caller's span.
fn log_fault<T>(operation: &'static str, result: &ServiceResult<T>) {
    match result {
        Err(err) if err.is_server_fault() => {
            tracing::error!(operation, error = %err, "Contact operation failed");
        }
        _ => {}
    }
}
