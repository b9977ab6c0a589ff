//! Pure domain services with no I/O.

pub mod calendar;
pub mod schedule;
pub mod sharing;
