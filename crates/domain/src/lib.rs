//! Domain layer for the masjid site backend.
//!
//! This crate contains:
//! - Domain models and request/response DTOs for every content kind
//! - Pure services (Ramadan schedule generation, calendar export, share links)
//! - Domain enums (roles, publication status, service icons)

pub mod models;
pub mod services;
