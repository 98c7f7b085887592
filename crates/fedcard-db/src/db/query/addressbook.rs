//! Query functions for address books.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::addressbook;
use crate::model::addressbook::{AddressBook, NewAddressBook};

type BoxedQuery<'a, T> = addressbook::BoxedQuery<'a, diesel::pg::Pg, T>;

/// ## Summary
/// Returns a query to find the address books owned by a principal.
#[must_use]
pub fn by_principal(
    principal_uri: &str,
) -> BoxedQuery<'_, diesel::dsl::AsSelect<AddressBook, diesel::pg::Pg>> {
    addressbook::table
        .select(AddressBook::as_select())
        .filter(addressbook::principal_uri.eq(principal_uri))
        .order(addressbook::id.asc())
        .into_boxed()
}

/// ## Summary
/// Lists a principal's address books, oldest first.
///
/// ## Errors
/// Returns a database error if the query fails.
pub async fn list_for_principal(
    conn: &mut DbConnection<'_>,
    principal_uri: &str,
) -> diesel::QueryResult<Vec<AddressBook>> {
    by_principal(principal_uri)
        .get_results::<AddressBook>(conn)
        .await
}

/// ## Summary
/// Inserts a new address book and returns the inserted record.
///
/// ## Errors
/// Returns a database error if the insert fails, including a unique violation
/// when the principal already owns an address book with the same URI.
pub async fn create_addressbook(
    conn: &mut DbConnection<'_>,
    new_addressbook: &NewAddressBook<'_>,
) -> diesel::QueryResult<AddressBook> {
    diesel::insert_into(addressbook::table)
        .values(new_addressbook)
        .returning(AddressBook::as_returning())
        .get_result(conn)
        .await
}
