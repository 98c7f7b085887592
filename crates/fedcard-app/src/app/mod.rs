pub mod api;

use std::sync::Arc;

use fedcard_core::config::Settings;
use fedcard_service::contacts::ContactService;
use salvo::Router;

use crate::config::ConfigHandler;
use crate::service_handler::ContactServiceHandler;

/// ## Summary
/// Assembles the full router: state injection hoops followed by the API routes.
///
/// ## Errors
/// Returns an error if any child route fails to initialize.
pub fn build_router(settings: Settings, service: Arc<ContactService>) -> anyhow::Result<Router> {
    Ok(Router::new()
        .hoop(ConfigHandler {
            settings: Arc::new(settings),
        })
        .hoop(ContactServiceHandler { service })
        .push(api::routes()?))
}
