use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use fedcard_core::config::{AuthMethod, Settings};
use fedcard_service::auth::{Admin, authenticate_admin, single_user_admin};
use fedcard_service::error::{ServiceError, ServiceResult};
use salvo::http::StatusCode;
use salvo::http::header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE};
use salvo::{Depot, Request, writing::Json};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult, ErrorResponse};

const CHALLENGE: &str = "Basic realm=\"fedcard\", charset=\"UTF-8\"";

/// ## Summary
/// Middleware handler that only lets administrators through.
///
/// Under `basic_auth` the `Authorization` header is checked against
/// `auth.admins`; under `single_user` every request acts as the configured
/// administrator.
///
/// ## Side Effects
/// Injects the acting [`Admin`] into the depot for downstream handlers.
///
/// ## Errors
/// Responds 401 with a Basic challenge when credentials are missing or wrong,
/// and 500 when the configuration cannot be read.
pub struct AdminAuthMiddleware;

#[salvo::async_trait]
impl salvo::Handler for AdminAuthMiddleware {
    #[tracing::instrument(skip(self, req, depot, res, ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut salvo::Response,
        ctrl: &mut salvo::FlowCtrl,
    ) {
        tracing::trace!("Authenticating request");

        let config = match get_config_from_depot(depot) {
            Ok(cfg) => cfg,
            Err(e) => {
                res.render(e);
                ctrl.skip_rest();
                return;
            }
        };

        match authenticate(req, &config) {
            Ok(admin) => {
                tracing::debug!(admin = %admin.name, "Administrator authenticated");
                depot.inject(admin);
            }
            Err(ServiceError::NotAuthenticated) => {
                res.status_code(StatusCode::UNAUTHORIZED);
                res.headers_mut()
                    .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
                res.render(Json(ErrorResponse {
                    error: ServiceError::NotAuthenticated.to_string(),
                }));
                ctrl.skip_rest();
            }
            Err(e) => {
                res.render(AppError::from(e));
                ctrl.skip_rest();
            }
        }
    }
}

fn authenticate(req: &Request, config: &Settings) -> ServiceResult<Admin> {
    match config.auth.method {
        AuthMethod::SingleUser => single_user_admin(config),
        AuthMethod::BasicAuth => {
            let Some((username, password)) = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(parse_basic_credentials)
            else {
                tracing::debug!("Missing or malformed basic credentials");
                return Err(ServiceError::NotAuthenticated);
            };

            authenticate_admin(&config.auth.admins, &username, &password)
        }
    }
}

/// ## Summary
/// Splits an `Authorization: Basic` header value into username and password.
///
/// Returns `None` for other schemes, invalid base64, non UTF-8 payloads or a
/// payload without a colon.
#[must_use]
pub fn parse_basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

/// ## Summary
/// Returns the administrator the auth middleware let through.
///
/// ## Errors
/// Returns an invariant violation if the handler runs outside the middleware.
pub fn current_admin(depot: &Depot) -> AppResult<Admin> {
    depot.obtain::<Admin>().cloned().map_err(|_err| {
        fedcard_core::error::CoreError::InvariantViolation("Administrator not found in depot")
            .into()
    })
}
