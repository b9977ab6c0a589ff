//! Shared utilities and common types for the masjid site backend.
//!
//! This crate provides common functionality used across all other crates:
//! - URL slug derivation and validation
//! - Password hashing with Argon2id
//! - Session token generation and validation
//! - Common validation logic

pub mod password;
pub mod session;
pub mod slug;
pub mod validation;
