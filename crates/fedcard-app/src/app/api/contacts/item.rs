use fedcard_core::types::ContactRecord;
use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use super::path_param;
use super::types::UpdateContactRequest;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::current_admin;
use crate::service_handler::get_service_from_depot;

fn not_found(user_id: &str, uid: &str) -> AppError {
    AppError::NotFound(format!("contact {uid} of user {user_id}"))
}

/// ## Summary
/// GET `/api/admin/contacts/{user_id}/{uid}` - Returns one contact.
///
/// ## Errors
/// Returns HTTP 404 if none of the user's address books holds the contact
/// Returns HTTP 500 if the stored card cannot be decoded or the storage fails
#[handler]
pub(super) async fn get_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match get(req, depot).await {
        Ok(record) => res.render(Json(record)),
        Err(e) => res.render(e),
    }
}

async fn get(req: &mut Request, depot: &Depot) -> AppResult<ContactRecord> {
    let service = get_service_from_depot(depot)?;
    let user_id = path_param(req, "user_id")?;
    let uid = path_param(req, "uid")?;

    service
        .get(&user_id, &uid)
        .await?
        .ok_or_else(|| not_found(&user_id, &uid))
}

/// ## Summary
/// PUT `/api/admin/contacts/{user_id}/{uid}` - Replaces a contact's fields.
///
/// The uid and owning address book stay the same; the card gets a new revision.
///
/// ## Errors
/// Returns HTTP 400 if the body is not valid JSON or a required field is empty
/// Returns HTTP 404 if none of the user's address books holds the contact
/// Returns HTTP 500 if the storage fails
#[handler]
pub(super) async fn update_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match update(req, depot).await {
        Ok(record) => res.render(Json(record)),
        Err(e) => res.render(e),
    }
}

async fn update(req: &mut Request, depot: &Depot) -> AppResult<ContactRecord> {
    let service = get_service_from_depot(depot)?;
    let admin = current_admin(depot)?;
    let user_id = path_param(req, "user_id")?;
    let uid = path_param(req, "uid")?;

    let request: UpdateContactRequest = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))?;
    request.check()?;

    let record = service
        .update(&user_id, &uid, request.fields)
        .await?
        .ok_or_else(|| not_found(&user_id, &uid))?;

    tracing::info!(admin = %admin.name, %user_id, %uid, "Contact updated");

    Ok(record)
}

/// ## Summary
/// DELETE `/api/admin/contacts/{user_id}/{uid}` - Removes a contact.
///
/// ## Errors
/// Returns HTTP 404 if nothing was removed
/// Returns HTTP 500 if the storage fails
#[handler]
pub(super) async fn delete_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match delete(req, depot).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => res.render(e),
    }
}

async fn delete(req: &mut Request, depot: &Depot) -> AppResult<()> {
    let service = get_service_from_depot(depot)?;
    let admin = current_admin(depot)?;
    let user_id = path_param(req, "user_id")?;
    let uid = path_param(req, "uid")?;

    if !service.delete(&user_id, &uid).await? {
        return Err(not_found(&user_id, &uid));
    }

    tracing::info!(admin = %admin.name, %user_id, %uid, "Contact deleted");
    Ok(())
}
