use salvo::{Depot, Request, Response, handler, writing::Json};

use super::path_param;
use super::types::UserContactsResponse;
use crate::error::AppResult;
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// GET `/api/admin/contacts/{user_id}` - Lists every contact of one user.
///
/// An unknown user has no address books and yields an empty list.
///
/// ## Errors
/// Returns HTTP 500 if the storage fails
#[handler]
pub(super) async fn list_user_contacts(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match list_for_user(req, depot).await {
        Ok(body) => res.render(Json(body)),
        Err(e) => res.render(e),
    }
}

async fn list_for_user(req: &mut Request, depot: &Depot) -> AppResult<UserContactsResponse> {
    let service = get_service_from_depot(depot)?;
    let user_id = path_param(req, "user_id")?;

    let contacts = service.list_for_user(&user_id).await?;
    Ok(UserContactsResponse { contacts })
}
