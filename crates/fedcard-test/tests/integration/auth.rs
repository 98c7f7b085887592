//! Integration tests for admin authentication.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn healthcheck_is_public() {
    let app = TestApp::with_basic_auth(&[]);

    let _ = TestRequest::get("/api/app/healthcheck")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("OK");
}

#[test_log::test(tokio::test)]
async fn admin_routes_require_credentials() {
    let app = TestApp::with_basic_auth(&["alice"]);

    let response = TestRequest::get(CONTACTS_ROUTE_PREFIX)
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert!(
        response
            .get_header("www-authenticate")
            .is_some_and(|value| value.starts_with("Basic")),
        "missing challenge"
    );

    let _ = TestRequest::post(CONTACTS_ROUTE_PREFIX)
        .basic_auth(ADMIN_NAME, "wrong")
        .json_body(&contact_body("alice", "A", "a@b", "a@c", None))
        .send(&app.service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    // Nothing was written by the rejected request.
    assert_eq!(app.store.addressbook_count().await, 0);
}

#[test_log::test(tokio::test)]
async fn configured_admin_can_manage_contacts() {
    let app = TestApp::with_basic_auth(&["alice"]);

    let created = TestRequest::post(CONTACTS_ROUTE_PREFIX)
        .basic_auth(ADMIN_NAME, ADMIN_PASSWORD)
        .json_body(&contact_body("alice", "A", "a@example.com", "a@remote", None))
        .send(&app.service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    let uid = created["uid"].as_str().expect("uid");
    let _ = TestRequest::delete(&contact_path("alice", uid))
        .basic_auth(ADMIN_NAME, ADMIN_PASSWORD)
        .send(&app.service)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
