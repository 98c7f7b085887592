#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Building a Salvo service over an in-memory store
//! - Making HTTP requests
//! - Asserting on responses and on what landed in storage
//!
//! ## Isolation
//! Every test builds its own `MemoryStore`, so tests run in parallel without
//! sharing state.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use salvo::http::header::HeaderName;
use salvo::http::{Method, ReqBody, StatusCode};
use salvo::prelude::*;
use salvo::test::{ResponseExt, TestClient};

use fedcard_test::app::build_router;
use fedcard_test::component::backend::AddressBookBackend;
use fedcard_test::component::config::{
    AdminCredential, AuthConfig, AuthMethod, ContactsConfig, LoggingConfig, ServerConfig,
    Settings, SingleUserAuthConfig, StorageBackend, StorageConfig,
};
use fedcard_test::component::contacts::{ContactService, OsRandom};
use fedcard_test::component::db::MemoryStore;
use fedcard_test::component::types::{CardObject, CollectionId, principal_uri};

pub use fedcard_test::component::constants::CONTACTS_ROUTE_PREFIX;

pub const ADMIN_NAME: &str = "root";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Test configuration - static struct instead of loading from file.
pub fn test_config(method: AuthMethod, admins: Vec<AdminCredential>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
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
                name: "Test Admin".to_string(),
            }),
        },
        contacts: ContactsConfig {
            default_limit: 100,
            max_limit: 1000,
        },
    }
}

/// A store and the service routing to it.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub service: Service,
}

impl TestApp {
    /// Creates an app in single user mode whose directory holds `users`.
    #[must_use]
    pub fn new(users: &[&str]) -> Self {
        Self::with_config(test_config(AuthMethod::SingleUser, Vec::new()), users)
    }

    /// Creates an app requiring basic auth as [`ADMIN_NAME`].
    ///
    /// ## Panics
    /// Panics if the password cannot be hashed.
    #[must_use]
    pub fn with_basic_auth(users: &[&str]) -> Self {
        let admins = vec![AdminCredential {
            name: ADMIN_NAME.to_string(),
            password_hash: fedcard_test::component::auth::password::hash_password(ADMIN_PASSWORD)
                .expect("Password should hash"),
        }];
        Self::with_config(test_config(AuthMethod::BasicAuth, admins), users)
    }

    /// ## Panics
    /// Panics if the router cannot be built.
    #[must_use]
    pub fn with_config(settings: Settings, users: &[&str]) -> Self {
        let store = Arc::new(MemoryStore::with_users(users.iter().copied()));
        let contacts = Arc::new(ContactService::new(
            store.clone(),
            store.clone(),
            Arc::new(OsRandom),
        ));
        let router = build_router(settings, contacts).expect("API routes should be valid");

        Self {
            store,
            service: Service::new(router),
        }
    }

    /// Returns the id of the first address book of `user_id`.
    ///
    /// ## Panics
    /// Panics if the store fails or the user has no address book.
    pub async fn first_collection_id(&self, user_id: &str) -> CollectionId {
        self.store
            .list_collections_for_principal(&principal_uri(user_id))
            .await
            .expect("Listing collections should succeed")
            .first()
            .map(|collection| collection.id)
            .expect("User should have an address book")
    }

    /// Returns every card stored for `user_id`, across address books.
    ///
    /// ## Panics
    /// Panics if the store fails.
    pub async fn stored_cards(&self, user_id: &str) -> Vec<CardObject> {
        let mut cards = Vec::new();
        for collection in self
            .store
            .list_collections_for_principal(&principal_uri(user_id))
            .await
            .expect("Listing collections should succeed")
        {
            cards.extend(
                self.store
                    .list_cards(collection.id)
                    .await
                    .expect("Listing cards should succeed"),
            );
        }
        cards
    }
}

/// Builds the URL of one contact.
#[must_use]
pub fn contact_path(user_id: &str, uid: &str) -> String {
    format!("{CONTACTS_ROUTE_PREFIX}/{user_id}/{uid}")
}

/// Test request builder for constructing HTTP requests.
pub struct TestRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl TestRequest {
    /// Creates a new test request with the given method and path.
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Creates a new GET request.
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a new POST request.
    #[must_use]
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a new PUT request.
    #[must_use]
    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a new DELETE request.
    #[must_use]
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets basic auth credentials.
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        self.header("Authorization", &format!("Basic {encoded}"))
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json_body(self, value: &serde_json::Value) -> Self {
        self.header("Content-Type", "application/json")
            .body(value.to_string())
    }

    /// Sends the request to the test service and returns the response.
    pub async fn send(self, service: &Service) -> TestResponse {
        let url = format!("http://127.0.0.1:5800{}", self.path);

        let mut client = match self.method.as_str() {
            "POST" => TestClient::post(&url),
            "PUT" => TestClient::put(&url),
            "DELETE" => TestClient::delete(&url),
            _ => TestClient::get(&url),
        };

        for (name, value) in self.headers {
            if let Ok(header_name) = HeaderName::try_from(name.as_str()) {
                client = client.add_header(header_name, value, true);
            }
        }

        if let Some(body_bytes) = self.body {
            client = client.body(ReqBody::Once(body_bytes.into()));
        }

        let mut response = client.send(service).await;

        let status = response
            .status_code
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        let body: Vec<u8> = response.take_bytes(None).await.unwrap_or_default().to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Represents an HTTP test response for assertions.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Asserts that the response status matches the expected code.
    #[must_use]
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {expected} but got {}: {}",
            self.status,
            self.body_string()
        );
        self
    }

    /// Asserts that the response body contains the expected substring.
    #[must_use]
    pub fn assert_body_contains(self, expected: &str) -> Self {
        let body = String::from_utf8_lossy(&self.body);
        assert!(
            body.contains(expected),
            "Expected body to contain '{expected}' but got:\n{body}"
        );
        self
    }

    /// Asserts that the response body is empty.
    #[must_use]
    pub fn assert_body_empty(self) -> Self {
        assert!(
            self.body.is_empty(),
            "Expected empty body but got {} bytes",
            self.body.len()
        );
        self
    }

    /// Returns the body as a UTF-8 string.
    #[must_use]
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parses the body as JSON.
    ///
    /// ## Panics
    /// Panics if the body is not JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// The JSON body of a contact for `user_id`.
#[must_use]
pub fn contact_body(
    user_id: &str,
    display_name: &str,
    email: &str,
    cloud_id: &str,
    organization: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "displayName": display_name,
        "email": email,
        "cloudId": cloud_id,
        "organization": organization,
    })
}

/// Creates a contact over HTTP and returns the response record.
///
/// ## Panics
/// Panics if the contact is not created.
pub async fn create_contact(service: &Service, body: &serde_json::Value) -> serde_json::Value {
    TestRequest::post(CONTACTS_ROUTE_PREFIX)
        .json_body(body)
        .send(service)
        .await
        .assert_status(StatusCode::CREATED)
        .json()
}
