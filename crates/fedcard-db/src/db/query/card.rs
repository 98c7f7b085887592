//! Query functions for stored cards.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::card;
use crate::model::card::{Card, CardContentUpdate, NewCard};

type BoxedQuery<'a, T> = card::BoxedQuery<'a, diesel::pg::Pg, T>;

/// ## Summary
/// Returns a query to select the cards of an address book in creation order.
#[must_use]
pub fn by_addressbook(
    addressbook_id: uuid::Uuid,
) -> BoxedQuery<'static, diesel::dsl::AsSelect<Card, diesel::pg::Pg>> {
    card::table
        .select(Card::as_select())
        .filter(card::addressbook_id.eq(addressbook_id))
        .order(card::id.asc())
        .into_boxed()
}

/// ## Summary
/// Returns a query to find a card by address book and name.
#[must_use]
pub fn by_addressbook_and_uri(
    addressbook_id: uuid::Uuid,
    uri: &str,
) -> BoxedQuery<'_, diesel::dsl::AsSelect<Card, diesel::pg::Pg>> {
    card::table
        .select(Card::as_select())
        .filter(card::addressbook_id.eq(addressbook_id))
        .filter(card::uri.eq(uri))
        .into_boxed()
}

/// ## Summary
/// Lists the cards of an address book.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_cards(
    conn: &mut DbConnection<'_>,
    addressbook_id: uuid::Uuid,
) -> diesel::QueryResult<Vec<Card>> {
    by_addressbook(addressbook_id).get_results(conn).await
}

/// ## Summary
/// Retrieves a card by address book and name.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn get_card(
    conn: &mut DbConnection<'_>,
    addressbook_id: uuid::Uuid,
    uri: &str,
) -> diesel::QueryResult<Option<Card>> {
    by_addressbook_and_uri(addressbook_id, uri)
        .get_result(conn)
        .await
        .optional()
}

/// ## Summary
/// Inserts a new card.
///
/// ## Errors
/// Returns a database error if the insert fails, including a unique violation
/// when the name is already taken in the address book.
pub async fn create_card(
    conn: &mut DbConnection<'_>,
    new_card: &NewCard<'_>,
) -> diesel::QueryResult<usize> {
    diesel::insert_into(card::table)
        .values(new_card)
        .execute(conn)
        .await
}

/// ## Summary
/// Replaces a card's content and returns the number of rows updated.
///
/// ## Errors
/// Returns a database error if the update fails.
pub async fn update_card(
    conn: &mut DbConnection<'_>,
    addressbook_id: uuid::Uuid,
    uri: &str,
    update: &CardContentUpdate<'_>,
) -> diesel::QueryResult<usize> {
    diesel::update(
        card::table
            .filter(card::addressbook_id.eq(addressbook_id))
            .filter(card::uri.eq(uri)),
    )
    .set(update)
    .execute(conn)
    .await
}

/// ## Summary
/// Deletes a card and returns the number of rows removed.
///
/// ## Errors
/// Returns a database error if the delete fails.
pub async fn delete_card(
    conn: &mut DbConnection<'_>,
    addressbook_id: uuid::Uuid,
    uri: &str,
) -> diesel::QueryResult<usize> {
    diesel::delete(
        card::table
            .filter(card::addressbook_id.eq(addressbook_id))
            .filter(card::uri.eq(uri)),
    )
    .execute(conn)
    .await
}
