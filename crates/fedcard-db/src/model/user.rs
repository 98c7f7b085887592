use diesel::{pg::Pg, prelude::*};
use fedcard_core::types::User;

use crate::db::schema;

/// Directory user row
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = schema::app_user)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(Pg))]
pub struct AppUser {
    pub user_id: String,
    pub principal_uri: String,
    pub display_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Insert struct for registering directory users
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::app_user)]
pub struct NewAppUser<'a> {
    pub user_id: &'a str,
    pub principal_uri: &'a str,
    pub display_name: Option<&'a str>,
}

impl From<AppUser> for User {
    fn from(row: AppUser) -> Self {
        Self {
            user_id: row.user_id,
            display_name: row.display_name,
        }
    }
}
