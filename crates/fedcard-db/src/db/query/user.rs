//! Query functions for directory users.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::app_user;
use crate::model::user::{AppUser, NewAppUser};

/// ## Summary
/// Retrieves a user by id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_user(
    conn: &mut DbConnection<'_>,
    user_id: &str,
) -> diesel::QueryResult<Option<AppUser>> {
    app_user::table
        .select(AppUser::as_select())
        .filter(app_user::user_id.eq(user_id))
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Lists every user by creation time, then id.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_users(conn: &mut DbConnection<'_>) -> diesel::QueryResult<Vec<AppUser>> {
    app_user::table
        .select(AppUser::as_select())
        .order((app_user::created_at.asc(), app_user::user_id.asc()))
        .get_results(conn)
        .await
}

/// ## Summary
/// Inserts users that do not exist yet and returns how many were added.
///
/// ## Errors
/// Returns a database error if the insert fails.
pub async fn insert_missing_users(
    conn: &mut DbConnection<'_>,
    users: &[NewAppUser<'_>],
) -> diesel::QueryResult<usize> {
    diesel::insert_into(app_user::table)
        .values(users)
        .on_conflict_do_nothing()
        .execute(conn)
        .await
}
