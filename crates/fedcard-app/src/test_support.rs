//! Builders shared by the in-crate HTTP tests.

use std::sync::Arc;

use fedcard_core::config::{
    AdminCredential, AuthConfig, AuthMethod, ContactsConfig, LoggingConfig, ServerConfig,
    Settings, SingleUserAuthConfig, StorageBackend, StorageConfig,
};
use fedcard_db::MemoryStore;
use fedcard_service::contacts::{ContactService, OsRandom};
use salvo::Service;
use salvo::http::header::CONTENT_TYPE;
use salvo::http::{ReqBody, StatusCode};
use salvo::test::{RequestBuilder, ResponseExt};

use crate::app::build_router;

pub(crate) const BASE_URL: &str = "http://127.0.0.1:8699";

pub(crate) fn settings(method: AuthMethod, admins: Vec<AdminCredential>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8699,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        storage: StorageConfig {
            backend: StorageBackend::Memory,
            users: Vec::new(),
        },
        database: None,
        auth: AuthConfig {
            method,
            admins,
            single_user: Some(SingleUserAuthConfig {
                name: "admin".to_string(),
            }),
        },
        contacts: ContactsConfig {
            default_limit: 2,
            max_limit: 3,
        },
    }
}

pub(crate) fn memory_service(users: &[&str]) -> Arc<ContactService> {
    let store = Arc::new(MemoryStore::with_users(users.iter().copied()));
    Arc::new(ContactService::new(store.clone(), store, Arc::new(OsRandom)))
}

pub(crate) fn single_user_app(users: &[&str]) -> Service {
    app(settings(AuthMethod::SingleUser, Vec::new()), users)
}

pub(crate) fn app(settings: Settings, users: &[&str]) -> Service {
    Service::new(build_router(settings, memory_service(users)).unwrap())
}

pub(crate) fn url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Sends the request and returns the status with the body parsed as JSON
/// (`Null` for an empty body).
pub(crate) async fn send(request: RequestBuilder, service: &Service) -> (StatusCode, serde_json::Value) {
    let mut response = request.send(service).await;
    let status = response
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.take_string().await.unwrap_or_default();

    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
    };

    (status, json)
}

/// Attaches `value` as a JSON request body.
pub(crate) fn json_body(request: RequestBuilder, value: &serde_json::Value) -> RequestBuilder {
    raw_json_body(request, &value.to_string())
}

pub(crate) fn raw_json_body(request: RequestBuilder, body: &str) -> RequestBuilder {
    request
        .add_header(CONTENT_TYPE, "application/json", true)
        .body(ReqBody::Once(body.as_bytes().to_vec().into()))
}
