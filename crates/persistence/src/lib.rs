//! Persistence layer for the masjid site backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations, the only path that touches the tables

pub mod db;
pub mod entities;
pub mod repositories;
