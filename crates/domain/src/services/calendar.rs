//! iCalendar export for events.
//!
//! Builds a single-event VCALENDAR document offered to visitors as a
//! downloadable `.ics` file. Events without an end time get a two-hour
//! default duration.

use chrono::{DateTime, Duration, Utc};

use crate::models::event::Event;

/// Default event duration when no end time is set.
const DEFAULT_DURATION_HOURS: i64 = 2;

/// Renders an event as an iCalendar document (CRLF line endings per RFC 5545).
pub fn event_to_ics(event: &Event) -> String {
    let end_time = event
        .end_time
        .unwrap_or_else(|| event.start_time + Duration::hours(DEFAULT_DURATION_HOURS));

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Masjid Site//Events//EN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.id),
        format!("DTSTART:{}", format_utc(event.start_time)),
        format!("DTEND:{}", format_utc(end_time)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        format!("LOCATION:{}", escape_text(&event.location)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut ics = lines.join("\r\n");
    ics.push_str("\r\n");
    ics
}

/// Download filename for an event's calendar file.
pub fn ics_filename(slug: &str) -> String {
    format!("{}.ics", slug)
}

/// Basic UTC date-time format: 20240316T183000Z.
fn format_utc(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escapes text per RFC 5545: backslash, semicolon, comma, and newlines.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::PublicationStatus;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn sample_event(end_time: Option<DateTime<Utc>>) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Community Potluck".into(),
            slug: "community-potluck".into(),
            description: "Bring a dish to share.\nAll welcome.".into(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 16, 18, 30, 0).unwrap(),
            end_time,
            location: "Social Hall, Somerset".into(),
            cover_image_url: None,
            status: PublicationStatus::Published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_ics_structure() {
        let ics = event_to_ics(&sample_event(None));
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("BEGIN:VEVENT\r\n"));
        assert!(ics.contains("SUMMARY:Community Potluck\r\n"));
    }

    #[test]
    fn test_dtstart_is_basic_utc_format() {
        let ics = event_to_ics(&sample_event(None));
        assert!(ics.contains("DTSTART:20240316T183000Z"));
    }

    #[test]
    fn test_missing_end_defaults_to_two_hours() {
        let ics = event_to_ics(&sample_event(None));
        assert!(ics.contains("DTEND:20240316T203000Z"));
    }

    #[test]
    fn test_explicit_end_is_used() {
        let end = Utc.with_ymd_and_hms(2024, 3, 16, 21, 0, 0).unwrap();
        let ics = event_to_ics(&sample_event(Some(end)));
        assert!(ics.contains("DTEND:20240316T210000Z"));
    }

    #[test]
    fn test_newlines_and_commas_escaped() {
        let ics = event_to_ics(&sample_event(None));
        assert!(ics.contains("DESCRIPTION:Bring a dish to share.\\nAll welcome."));
        assert!(ics.contains("LOCATION:Social Hall\\, Somerset"));
    }

    #[test]
    fn test_filename_from_slug() {
        assert_eq!(ics_filename("community-potluck"), "community-potluck.ics");
    }
}
