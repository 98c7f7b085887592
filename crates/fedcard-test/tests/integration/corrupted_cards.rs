//! Integration tests for cards that no longer decode.
//!
//! Other clients share the storage, so a card may be unreadable. Listings skip
//! it, reading it is a server fault, and update or delete still work on it.

use fedcard_test::component::backend::AddressBookBackend;
use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

const BROKEN_UID: &str = "broken";

async fn app_with_broken_card() -> TestApp {
    let app = TestApp::new(&["alice"]);
    create_contact(
        &app.service,
        &contact_body("alice", "Good", "good@example.com", "good@remote", None),
    )
    .await;

    let collection_id = app.first_collection_id("alice").await;
    app.store
        .create_card(collection_id, &format!("{BROKEN_UID}.vcf"), "this is not a vcard")
        .await
        .expect("Seeding the broken card should succeed");

    app
}

#[test_log::test(tokio::test)]
async fn listings_skip_undecodable_cards() {
    let app = app_with_broken_card().await;

    let page = TestRequest::get(CONTACTS_ROUTE_PREFIX)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(page["total"], 1);
    assert_eq!(page["contacts"][0]["displayName"], "Good");

    let user = TestRequest::get(&format!("{CONTACTS_ROUTE_PREFIX}/alice"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(user["contacts"].as_array().map(Vec::len), Some(1));
}

#[test_log::test(tokio::test)]
async fn reading_an_undecodable_card_is_a_server_fault() {
    let app = app_with_broken_card().await;

    let response = TestRequest::get(&contact_path("alice", BROKEN_UID))
        .send(&app.service)
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_body_contains("Internal server error");
    assert!(!response.body_string().contains("vcard"));
}

#[test_log::test(tokio::test)]
async fn update_repairs_an_undecodable_card() {
    let app = app_with_broken_card().await;

    let _ = TestRequest::put(&contact_path("alice", BROKEN_UID))
        .json_body(&json!({
            "displayName": "Repaired",
            "email": "fixed@example.com",
            "cloudId": "fixed@remote",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    let fetched = TestRequest::get(&contact_path("alice", BROKEN_UID))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["uid"], BROKEN_UID);
    assert_eq!(fetched["displayName"], "Repaired");
}

#[test_log::test(tokio::test)]
async fn delete_removes_an_undecodable_card() {
    let app = app_with_broken_card().await;

    let _ = TestRequest::delete(&contact_path("alice", BROKEN_UID))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(app.stored_cards("alice").await.len(), 1);
}
