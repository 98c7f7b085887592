//! Request and response bodies of the contacts API.

use fedcard_core::config::ContactsConfig;
use fedcard_core::types::{ContactFields, ContactRecord};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Create contact request payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(flatten)]
    pub fields: ContactFields,
}

impl CreateContactRequest {
    /// ## Errors
    /// Returns `BadRequest` naming every empty required field.
    pub fn check(&self) -> AppResult<()> {
        let mut missing = Vec::new();
        if self.user_id.is_empty() {
            missing.push("userId");
        }
        missing.extend(self.fields.missing_fields());
        require(&missing, &self.fields)
    }
}

/// ## Summary
/// Update contact request payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(flatten)]
    pub fields: ContactFields,
}

impl UpdateContactRequest {
    /// ## Errors
    /// Returns `BadRequest` naming every empty required field.
    pub fn check(&self) -> AppResult<()> {
        require(&self.fields.missing_fields(), &self.fields)
    }
}

fn require(missing: &[&str], fields: &ContactFields) -> AppResult<()> {
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let with_cr = fields.fields_with_carriage_return();
    if !with_cr.is_empty() {
        return Err(AppError::BadRequest(format!(
            "carriage returns are not allowed in: {}",
            with_cr.join(", ")
        )));
    }

    Ok(())
}

/// ## Summary
/// Every contact of one user, unpaginated.
#[derive(Debug, Serialize)]
pub struct UserContactsResponse {
    pub contacts: Vec<ContactRecord>,
}

/// Pagination and filtering read from the listing query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub user_id: Option<String>,
    pub limit: usize,
    pub offset: usize,
}

impl ListParams {
    /// ## Summary
    /// Interprets raw query values. A missing `limit` falls back to the
    /// configured default and any `limit` is clamped to the configured maximum.
    /// An empty `userId` lists every user.
    ///
    /// ## Errors
    /// Returns `BadRequest` if `limit` or `offset` is not a non-negative integer.
    pub fn parse(
        user_id: Option<String>,
        limit: Option<&str>,
        offset: Option<&str>,
        config: &ContactsConfig,
    ) -> AppResult<Self> {
        let limit = limit
            .map(|raw| parse_count("limit", raw))
            .transpose()?
            .unwrap_or(config.default_limit)
            .min(config.max_limit);
        let offset = offset
            .map(|raw| parse_count("offset", raw))
            .transpose()?
            .unwrap_or(0);

        Ok(Self {
            user_id: user_id.filter(|id| !id.is_empty()),
            limit,
            offset,
        })
    }
}

fn parse_count(name: &str, raw: &str) -> AppResult<usize> {
    raw.trim().parse().map_err(|_err| {
        AppError::BadRequest(format!("{name} must be a non-negative integer, got {raw:?}"))
    })
}
