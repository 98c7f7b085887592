use diesel::{pg::Pg, prelude::*};
use fedcard_core::types::CardObject;

use super::addressbook::AddressBook;
use crate::db::schema;

/// Stored card row
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = schema::card)]
#[diesel(belongs_to(AddressBook, foreign_key = addressbook_id))]
#[diesel(check_for_backend(Pg))]
pub struct Card {
    pub id: uuid::Uuid,
    pub addressbook_id: uuid::Uuid,
    pub uri: String,
    pub data: String,
    pub etag: String,
    pub last_modified: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for creating new cards
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::card)]
pub struct NewCard<'a> {
    pub id: uuid::Uuid,
    pub addressbook_id: uuid::Uuid,
    pub uri: &'a str,
    pub data: &'a str,
    pub etag: &'a str,
}

/// Changeset applied when a card's content is replaced
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = schema::card)]
pub struct CardContentUpdate<'a> {
    pub data: &'a str,
    pub etag: &'a str,
    pub last_modified: chrono::DateTime<chrono::Utc>,
}

impl From<Card> for CardObject {
    fn from(row: Card) -> Self {
        Self {
            name: row.uri,
            data: row.data,
        }
    }
}
