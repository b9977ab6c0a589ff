//! HTTP route handlers.

pub mod admin_users;
pub mod announcements;
pub mod auth;
pub mod contact;
pub mod events;
pub mod gallery;
pub mod health;
pub mod media;
pub mod prayer_times;
pub mod profile;
pub mod ramadan;
pub mod services;
pub mod team;
