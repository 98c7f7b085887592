mod app_specific;
mod contacts;

use salvo::Router;

use crate::middleware::auth::AdminAuthMiddleware;

// Re-export route constants from core
pub use fedcard_core::constants::{
    ADMIN_ROUTE_COMPONENT, ADMIN_ROUTE_PREFIX, API_ROUTE_COMPONENT, API_ROUTE_PREFIX,
    APP_ROUTE_PREFIX, CONTACTS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router: unauthenticated app routes and the admin-only
/// contacts API.
///
/// ## Errors
/// Returns an error if any child route handler fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(
            Router::with_path(ADMIN_ROUTE_COMPONENT)
                .hoop(AdminAuthMiddleware)
                .push(contacts::routes()),
        ))
}
