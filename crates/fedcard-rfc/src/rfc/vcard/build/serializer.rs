//! vCard serialization.

use super::escape::{escape_param_value, escape_text};
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty};

const CRLF: &str = "\r\n";

/// Serializes a single vCard to a string.
#[must_use]
pub fn serialize_single(card: &VCard) -> String {
    let mut output = String::new();
    serialize_vcard(card, &mut output);
    output
}

fn serialize_vcard(card: &VCard, output: &mut String) {
    output.push_str("BEGIN:VCARD");
    output.push_str(CRLF);

    // VERSION must be first after BEGIN
    output.push_str("VERSION:");
    output.push_str(card.version.as_str());
    output.push_str(CRLF);

    for prop in &card.properties {
        serialize_property(prop, output);
    }

    output.push_str("END:VCARD");
    output.push_str(CRLF);
}

fn serialize_property(prop: &VCardProperty, output: &mut String) {
    if let Some(ref group) = prop.group {
        output.push_str(group);
        output.push('.');
    }

    output.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, output);
    }

    output.push(':');
    output.push_str(&escape_text(&prop.value));
    output.push_str(CRLF);
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}
