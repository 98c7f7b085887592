use fedcard_core::types::ContactFields;

use crate::error::RfcResult;
use crate::rfc::vcard::core::names;
use crate::rfc::vcard::{VCard, parse_single};

/// Contact data recovered from stored card text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCard {
    /// Empty when the card has no UID.
    pub uid: String,
    pub fields: ContactFields,
}

/// ## Summary
/// Decodes card text into a uid and contact fields.
///
/// Missing UID, FN, EMAIL or cloud id fields decode as empty strings. The cloud
/// id is read from CLOUD, falling back to X-CLOUD-ID. An absent or empty ORG
/// decodes as `None`.
///
/// ## Errors
/// Returns `RfcError::VCardParse` if the text is not a well-formed vCard.
pub fn decode(text: &str) -> RfcResult<DecodedCard> {
    let card = parse_single(text)?;
    Ok(from_vcard(&card))
}

fn from_vcard(card: &VCard) -> DecodedCard {
    let value = |name: &str| card.get_value(name).unwrap_or_default().to_string();

    let cloud_id = card
        .get_value(names::CLOUD)
        .or_else(|| card.get_value(names::X_CLOUD_ID))
        .unwrap_or_default();

    DecodedCard {
        uid: value(names::UID),
        fields: ContactFields::new(
            value(names::FN),
            value(names::EMAIL),
            cloud_id,
            card.get_value(names::ORG).map(str::to_string),
        ),
    }
}
