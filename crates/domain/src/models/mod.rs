//! Domain models and request/response DTOs.

pub mod admin_user;
pub mod announcement;
pub mod contact_message;
pub mod event;
pub mod gallery;
pub mod profile;
pub mod prayer_times;
pub mod ramadan;
pub mod service;
pub mod team_member;
