//! HTTP middleware components.

pub mod auth;
pub mod logging;
pub mod trace_id;

pub use auth::{require_admin, AdminAuth};
pub use trace_id::{trace_id, RequestId, REQUEST_ID_HEADER};
