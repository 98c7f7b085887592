//! Administrator authentication.
//!
//! ## Module Organization
//!
//! - `authenticate`: Resolves the acting administrator (single user, basic auth)
//! - `password`: Password hashing and verification with Argon2

pub mod authenticate;
pub mod password;

pub use authenticate::{Admin, authenticate_admin, single_user_admin};
