use diesel::{pg::Pg, prelude::*};
use fedcard_core::types::Collection;

use crate::db::schema;

/// Address book row
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::addressbook)]
#[diesel(check_for_backend(Pg))]
pub struct AddressBook {
    pub id: uuid::Uuid,
    pub principal_uri: String,
    pub uri: String,
    pub display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for creating new address books
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::addressbook)]
pub struct NewAddressBook<'a> {
    pub id: uuid::Uuid,
    pub principal_uri: &'a str,
    pub uri: &'a str,
    pub display_name: Option<&'a str>,
}

impl From<AddressBook> for Collection {
    fn from(row: AddressBook) -> Self {
        Self {
            id: row.id,
            uri: row.uri,
            display_name: row.display_name,
        }
    }
}
