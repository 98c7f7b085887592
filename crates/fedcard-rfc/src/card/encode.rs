use chrono::{DateTime, Utc};
use fedcard_core::types::ContactFields;

use super::PRODUCT_ID;
use crate::rfc::vcard::{VCard, VCardParameter, VCardProperty, VCardVersion, serialize_single};
use crate::rfc::vcard::core::names;

/// `strftime` pattern of the REV timestamp.
pub const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// ## Summary
/// Encodes a contact as card text, stamping REV with the current time.
///
/// Callers supply non-empty required fields without carriage returns; nothing
/// is re-validated here.
#[must_use]
pub fn encode(uid: &str, fields: &ContactFields) -> String {
    encode_at(uid, fields, Utc::now())
}

/// ## Summary
/// Encodes a contact as card text with an explicit revision time.
#[must_use]
pub fn encode_at(uid: &str, fields: &ContactFields, revision: DateTime<Utc>) -> String {
    serialize_single(&to_vcard(uid, fields, revision))
}

/// ## Summary
/// Builds the structured vCard for a contact without serializing it.
#[must_use]
pub fn to_vcard(uid: &str, fields: &ContactFields, revision: DateTime<Utc>) -> VCard {
    let mut card = VCard::with_version(VCardVersion::V3);

    card.add_property(VCardProperty::text(names::PRODID, PRODUCT_ID));
    card.add_property(VCardProperty::text(names::UID, uid));
    card.add_property(VCardProperty::text(names::FN, &fields.display_name));
    card.add_property(
        VCardProperty::text(names::EMAIL, &fields.email)
            .with_param(VCardParameter::type_param("INTERNET")),
    );
    card.add_property(VCardProperty::text(names::CLOUD, &fields.cloud_id));
    card.add_property(VCardProperty::text(names::X_CLOUD_ID, &fields.cloud_id));

    if let Some(org) = fields.organization.as_deref().filter(|org| !org.is_empty()) {
        card.add_property(VCardProperty::text(names::ORG, org));
    }

    card.add_property(VCardProperty::text(
        names::REV,
        revision.format(REV_FORMAT).to_string(),
    ));

    card
}
