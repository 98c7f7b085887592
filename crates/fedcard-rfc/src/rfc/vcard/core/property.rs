//! vCard property types.

use super::parameter::VCardParameter;
use crate::rfc::vcard::parse::unescape_text;

/// A text-valued vCard property.
///
/// Keeps the raw (still escaped) value next to the decoded text so that
/// structured properties can be re-split by callers that need components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Unescaped value.
    pub value: String,
    /// Original raw value string.
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: value.into(),
            raw_value: String::new(),
        }
    }

    /// Creates a property from a raw, escaped value as found on the wire.
    #[must_use]
    pub fn from_raw(
        group: Option<String>,
        name: impl Into<String>,
        params: Vec<VCardParameter>,
        raw_value: impl Into<String>,
    ) -> Self {
        let raw_value = raw_value.into();
        Self {
            group,
            name: name.into().to_ascii_uppercase(),
            params,
            value: unescape_text(&raw_value),
            raw_value,
        }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }
}

/// Property names fedcard reads or writes.
pub mod names {
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";
    pub const UID: &str = "UID";
    pub const FN: &str = "FN";
    pub const EMAIL: &str = "EMAIL";
    pub const ORG: &str = "ORG";
    pub const REV: &str = "REV";
    /// Federated cloud id (vCard 4.0 style).
    pub const CLOUD: &str = "CLOUD";
    /// Federated cloud id as written for readers predating `CLOUD`.
    pub const X_CLOUD_ID: &str = "X-CLOUD-ID";
}
