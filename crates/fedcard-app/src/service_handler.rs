use std::sync::Arc;

use fedcard_core::error::CoreError;
use fedcard_service::contacts::ContactService;
use salvo::async_trait;

use crate::error::AppResult;

/// Injects the shared contact service into the depot.
pub struct ContactServiceHandler {
    pub service: Arc<ContactService>,
}

#[async_trait]
impl salvo::Handler for ContactServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the contact service from the depot.
///
/// ## Errors
/// Returns an error if no service was injected for this request.
pub fn get_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ContactService>> {
    depot
        .obtain::<Arc<ContactService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Contact service not found in depot").into())
}
