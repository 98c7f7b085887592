/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const ADMIN_ROUTE_COMPONENT: &str = "admin";
pub const ADMIN_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ADMIN_ROUTE_COMPONENT);

pub const CONTACTS_ROUTE_COMPONENT: &str = "contacts";
pub const CONTACTS_ROUTE_PREFIX: &str =
    const_str::concat!(ADMIN_ROUTE_PREFIX, "/", CONTACTS_ROUTE_COMPONENT);

/// Local name of the address book contacts are written to.
pub const DEFAULT_ADDRESSBOOK_URI: &str = "contacts";
/// Human-readable label given to a lazily created default address book.
pub const DEFAULT_ADDRESSBOOK_DISPLAY_NAME: &str = "Contacts";

/// Suffix appended to a contact uid to form its card name.
pub const CARD_FILE_EXTENSION: &str = "vcf";

pub const PRINCIPAL_URI_PREFIX: &str = "principals/users/";

pub const DEFAULT_PAGE_LIMIT: usize = 100;
pub const DEFAULT_MAX_PAGE_LIMIT: usize = 1000;
