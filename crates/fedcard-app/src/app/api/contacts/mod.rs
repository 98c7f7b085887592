//! Admin CRUD over users' contacts.
//!
//! ```text
//! GET    /api/admin/contacts?userId=&limit=&offset=   paginated listing
//! POST   /api/admin/contacts                           create
//! GET    /api/admin/contacts/{user_id}                 every contact of one user
//! GET    /api/admin/contacts/{user_id}/{uid}           read
//! PUT    /api/admin/contacts/{user_id}/{uid}           replace
//! DELETE /api/admin/contacts/{user_id}/{uid}           remove
//! ```

mod collection;
mod item;
pub mod types;
mod user;


use fedcard_core::constants::CONTACTS_ROUTE_COMPONENT;
use fedcard_core::error::CoreError;
use salvo::{Request, Router};

use crate::error::AppResult;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACTS_ROUTE_COMPONENT)
        .get(collection::list_contacts)
        .post(collection::create_contact)
        .push(
            Router::with_path("{user_id}").get(user::list_user_contacts).push(
                Router::with_path("{uid}")
                    .get(item::get_contact)
                    .put(item::update_contact)
                    .delete(item::delete_contact),
            ),
        )
}

/// Reads a path segment the router already matched.
fn path_param(req: &Request, name: &str) -> AppResult<String> {
    req.param::<String>(name)
        .ok_or_else(|| CoreError::InvariantViolation("route parameter missing").into())
}
