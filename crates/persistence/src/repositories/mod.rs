//! Repository implementations, one per content area.

pub mod admin_user;
pub mod announcement;
pub mod contact_message;
pub mod event;
pub mod gallery;
pub mod prayer_times;
pub mod profile;
pub mod ramadan;
pub mod service;
pub mod team;

pub use admin_user::AdminUserRepository;
pub use announcement::AnnouncementRepository;
pub use contact_message::ContactMessageRepository;
pub use event::EventRepository;
pub use gallery::GalleryRepository;
pub use prayer_times::PrayerTimesRepository;
pub use profile::ProfileRepository;
pub use ramadan::RamadanRepository;
pub use service::ServiceRepository;
pub use team::TeamRepository;
