use fedcard_core::config::{AdminCredential, AuthMethod, Settings};

use super::password::verify_password;
use crate::error::{ServiceError, ServiceResult};

/// The administrator a request acts as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub name: String,
}

/// ## Summary
/// Returns the administrator configured for single user authentication.
///
/// ## Errors
/// Returns `InvalidConfiguration` if the auth method is not `single_user` or
/// its section is missing.
pub fn single_user_admin(config: &Settings) -> ServiceResult<Admin> {
    if config.auth.method != AuthMethod::SingleUser {
        return Err(ServiceError::InvalidConfiguration(
            "single user authentication is not enabled".to_string(),
        ));
    }

    let single_user = config.auth.single_user.as_ref().ok_or_else(|| {
        ServiceError::InvalidConfiguration("Single user config is missing".to_string())
    })?;

    Ok(Admin {
        name: single_user.name.clone(),
    })
}

/// ## Summary
/// Checks basic auth credentials against the configured administrators.
///
/// ## Errors
/// Returns `NotAuthenticated` if no administrator has this name or the
/// password does not match.
#[tracing::instrument(skip(admins, password))]
pub fn authenticate_admin(
    admins: &[AdminCredential],
    username: &str,
    password: &str,
) -> ServiceResult<Admin> {
    let Some(admin) = admins.iter().find(|admin| admin.name == username) else {
        tracing::debug!("Unknown administrator");
        return Err(ServiceError::NotAuthenticated);
    };

    match verify_password(password, &admin.password_hash) {
        Ok(()) => Ok(Admin {
            name: admin.name.clone(),
        }),
        // A malformed stored hash is a configuration problem, not a bad password.
        Err(ServiceError::InvalidConfiguration(msg)) => {
            tracing::error!(error = %msg, "Stored administrator hash is invalid");
            Err(ServiceError::NotAuthenticated)
        }
        Err(err) => Err(err),
    }
}
