use fedcard_core::types::ContactRecord;
use fedcard_service::contacts::ContactPage;
use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use super::types::{CreateContactRequest, ListParams};
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::current_admin;
use crate::service_handler::get_service_from_depot;

/// ## Summary
/// GET `/api/admin/contacts` - Lists contacts of one user (`userId`) or of every
/// user, paginated with `limit` and `offset`.
///
/// ## Errors
/// Returns HTTP 400 if `limit` or `offset` is not a non-negative integer
/// Returns HTTP 500 if the directory or storage fails
#[handler]
pub(super) async fn list_contacts(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match list(req, depot).await {
        Ok(page) => res.render(Json(page)),
        Err(e) => res.render(e),
    }
}

async fn list(req: &mut Request, depot: &Depot) -> AppResult<ContactPage> {
    let config = get_config_from_depot(depot)?;
    let service = get_service_from_depot(depot)?;

    let params = ListParams::parse(
        req.query::<String>("userId"),
        req.query::<String>("limit").as_deref(),
        req.query::<String>("offset").as_deref(),
        &config.contacts,
    )?;

    tracing::debug!(?params, "Listing contacts");

    Ok(service
        .list(params.user_id.as_deref(), params.limit, params.offset)
        .await?)
}

/// ## Summary
/// POST `/api/admin/contacts` - Creates a contact in the user's default address book.
///
/// ## Side Effects
/// Creates the user's default address book on first use.
///
/// ## Errors
/// Returns HTTP 400 if the body is not valid JSON or a required field is empty
/// Returns HTTP 404 if the user is unknown
/// Returns HTTP 500 if the directory or storage fails
#[handler]
pub(super) async fn create_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    match create(req, depot).await {
        Ok(record) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(record));
        }
        Err(e) => res.render(e),
    }
}

async fn create(req: &mut Request, depot: &Depot) -> AppResult<ContactRecord> {
    let service = get_service_from_depot(depot)?;
    let admin = current_admin(depot)?;

    let request: CreateContactRequest = req
        .parse_json()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid request body: {e}")))?;
    request.check()?;

    let record = service.create(&request.user_id, request.fields).await?;

    tracing::info!(
        admin = %admin.name,
        user_id = %record.user_id,
        uid = %record.uid,
        "Contact created"
    );

    Ok(record)
}
