//! vCard wrapper type.

use super::property::{VCardProperty, names};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426).
    V3,
    /// vCard 4.0 (RFC 6350).
    #[default]
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(())
    }
}

/// A complete vCard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VCard {
    /// vCard version.
    pub version: VCardVersion,
    /// All properties except VERSION, in order of appearance.
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    /// Creates a new vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vCard with the specified version.
    #[must_use]
    pub fn with_version(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    /// Adds a property to the vCard.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the unescaped value of the first property with the given name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get_property(name).map(|p| p.value.as_str())
    }

    /// Returns the UID value.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_value(names::UID)
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_value(names::FN)
    }
}
