//! Request extractors.

pub mod admin_auth;

pub use crate::middleware::auth::AdminAuth;
