//! Database row mappings and column-level enum types.

pub mod admin_user;
pub mod announcement;
pub mod contact_message;
pub mod event;
pub mod gallery;
pub mod prayer_times;
pub mod profile;
pub mod ramadan;
pub mod service;
pub mod team_member;

pub use admin_user::{AdminRoleDb, AdminUserEntity};
pub use announcement::AnnouncementEntity;
pub use contact_message::ContactMessageEntity;
pub use event::{EventEntity, PublicationStatusDb};
pub use gallery::{GalleryAlbumEntity, GalleryPhotoEntity};
pub use prayer_times::PrayerTimesEntity;
pub use profile::MasjidProfileEntity;
pub use ramadan::RamadanDayEntity;
pub use service::{ServiceEntity, ServiceIconDb};
pub use team_member::TeamMemberEntity;
