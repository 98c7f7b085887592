//! Integration tests for the contacts CRUD routes.
//!
//! Tests:
//! - The create / get / delete scenario end to end
//! - Stored card layout as other address-book clients will read it
//! - Pagination across users
//! - Not-found versus error outcomes

use salvo::http::StatusCode;
use serde_json::{Value, json};

use super::helpers::*;

/// ## Summary
/// Create, read back, delete, and read again for one contact.
#[test_log::test(tokio::test)]
async fn create_get_delete_scenario() {
    let app = TestApp::new(&["alice"]);

    let created = create_contact(
        &app.service,
        &contact_body("alice", "Bob Smith", "bob@example.com", "bob@remote.cloud", None),
    )
    .await;

    let uid = created["uid"].as_str().expect("uid").to_string();
    assert_eq!(uid.len(), 36);
    assert_eq!(uid.matches('-').count(), 4);

    let fetched = TestRequest::get(&contact_path("alice", &uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["displayName"], "Bob Smith");
    assert_eq!(fetched["email"], "bob@example.com");
    assert_eq!(fetched["cloudId"], "bob@remote.cloud");
    assert_eq!(fetched["organization"], Value::Null);
    assert_eq!(fetched["addressBookId"], created["addressBookId"]);

    let _ = TestRequest::delete(&contact_path("alice", &uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NO_CONTENT)
        .assert_body_empty();

    let _ = TestRequest::get(&contact_path("alice", &uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let _ = TestRequest::delete(&contact_path("alice", &uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// ## Summary
/// The stored blob is a CRLF-terminated vCard 3.0 carrying both cloud id properties.
#[test_log::test(tokio::test)]
async fn stored_card_uses_the_shared_layout() {
    let app = TestApp::new(&["alice"]);

    let created = create_contact(
        &app.service,
        &contact_body(
            "alice",
            "Smith; Bob",
            "bob@example.com",
            "bob@remote.cloud",
            Some("ACME, Inc."),
        ),
    )
    .await;
    let uid = created["uid"].as_str().expect("uid");

    let cards = app.stored_cards("alice").await;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, format!("{uid}.vcf"));

    let data = &cards[0].data;
    assert!(data.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"), "{data}");
    assert!(data.ends_with("END:VCARD\r\n"), "{data}");
    assert!(data.contains(&format!("\r\nUID:{uid}\r\n")), "{data}");
    assert!(data.contains("\r\nFN:Smith\\; Bob\r\n"), "{data}");
    assert!(data.contains("\r\nEMAIL;TYPE=INTERNET:bob@example.com\r\n"), "{data}");
    assert!(data.contains("\r\nCLOUD:bob@remote.cloud\r\n"), "{data}");
    assert!(data.contains("\r\nX-CLOUD-ID:bob@remote.cloud\r\n"), "{data}");
    assert!(data.contains("\r\nORG:ACME\\, Inc.\r\n"), "{data}");
    assert!(data.contains("\r\nREV:"), "{data}");
    assert!(!data.replace("\r\n", "").contains('\n'), "bare LF in {data}");

    let fetched = TestRequest::get(&contact_path("alice", uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["displayName"], "Smith; Bob");
    assert_eq!(fetched["organization"], "ACME, Inc.");
}

/// ## Summary
/// Special characters survive the trip through storage.
#[test_log::test(tokio::test)]
async fn escaped_values_round_trip() {
    let app = TestApp::new(&["alice"]);
    let tricky = "back\\slash; semi, comma\nnew line";

    let created = create_contact(
        &app.service,
        &contact_body("alice", tricky, "bob@example.com", "bob@remote.cloud", Some(tricky)),
    )
    .await;
    let uid = created["uid"].as_str().expect("uid");

    let fetched = TestRequest::get(&contact_path("alice", uid))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(fetched["displayName"], tricky);
    assert_eq!(fetched["organization"], tricky);
}

/// ## Summary
/// Ten contacts across users, paged from the end.
#[test_log::test(tokio::test)]
async fn pagination_spans_users() {
    let app = TestApp::new(&["alice", "bob", "carol"]);

    for (i, user) in ["alice", "alice", "alice", "bob", "bob", "bob", "bob", "carol", "carol", "carol"]
        .into_iter()
        .enumerate()
    {
        create_contact(
            &app.service,
            &contact_body(user, &format!("Contact {i}"), "c@example.com", "c@remote", None),
        )
        .await;
    }

    let page = TestRequest::get(&format!("{CONTACTS_ROUTE_PREFIX}?limit=4&offset=8"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(page["total"], 10);
    let contacts = page["contacts"].as_array().expect("contacts");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0]["displayName"], "Contact 8");
    assert_eq!(contacts[1]["userId"], "carol");

    let page = TestRequest::get(&format!("{CONTACTS_ROUTE_PREFIX}?limit=4&offset=20"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(page["total"], 10);
    assert_eq!(page["contacts"], json!([]));

    let page = TestRequest::get(&format!("{CONTACTS_ROUTE_PREFIX}?userId=bob"))
        .send(&app.service)
        .await
        .json();
    assert_eq!(page["total"], 4);

    let all_of_carol = TestRequest::get(&format!("{CONTACTS_ROUTE_PREFIX}/carol"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(all_of_carol["contacts"].as_array().map(Vec::len), Some(3));
}

/// ## Summary
/// Only the first create for a user makes its address book.
#[test_log::test(tokio::test)]
async fn default_address_book_is_created_once() {
    let app = TestApp::new(&["alice"]);
    assert_eq!(app.store.addressbook_count().await, 0);

    let first = create_contact(
        &app.service,
        &contact_body("alice", "One", "one@example.com", "one@remote", None),
    )
    .await;
    let second = create_contact(
        &app.service,
        &contact_body("alice", "Two", "two@example.com", "two@remote", None),
    )
    .await;

    assert_eq!(app.store.addressbook_count().await, 1);
    assert_eq!(first["addressBookId"], second["addressBookId"]);
    assert_ne!(first["uid"], second["uid"]);
}

/// ## Summary
/// Unknown contacts and users are absences; only create checks the directory.
#[test_log::test(tokio::test)]
async fn not_found_is_not_an_error() {
    let app = TestApp::new(&["alice"]);

    let _ = TestRequest::get(&contact_path("alice", "nonexistent-uid"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("nonexistent-uid");

    let _ = TestRequest::get(&contact_path("nonexistent-user", "any"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let _ = TestRequest::post(CONTACTS_ROUTE_PREFIX)
        .json_body(&contact_body("nonexistent-user", "A", "a@b", "a@c", None))
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("User not found");
}

/// ## Summary
/// Update keeps identity and replaces every field, including clearing the organization.
#[test_log::test(tokio::test)]
async fn update_replaces_the_card() {
    let app = TestApp::new(&["alice"]);
    let created = create_contact(
        &app.service,
        &contact_body("alice", "Bob", "bob@example.com", "bob@remote", Some("ACME")),
    )
    .await;
    let uid = created["uid"].as_str().expect("uid");

    let updated = TestRequest::put(&contact_path("alice", uid))
        .json_body(&json!({
            "displayName": "Robert",
            "email": "robert@example.com",
            "cloudId": "robert@remote",
        }))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(updated["uid"], uid);
    assert_eq!(updated["organization"], Value::Null);

    let cards = app.stored_cards("alice").await;
    assert_eq!(cards.len(), 1);
    assert!(cards[0].data.contains("FN:Robert\r\n"));
    assert!(!cards[0].data.contains("ORG:"));
}
