//! HTTP surface of fedcard: the admin contacts API served with salvo.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod service_handler;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
