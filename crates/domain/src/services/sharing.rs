//! WhatsApp deep links for iftar sponsorship inquiries.
//!
//! The public Ramadan page offers a pre-filled messaging link per day; the
//! link is built entirely server-side from the masjid phone number, with no
//! round-trip to any third party.

use chrono::NaiveDate;

/// Builds a `wa.me` deep link with URL-encoded text.
///
/// Returns `None` when the phone number carries no digits (no contact number
/// configured on the profile).
pub fn whatsapp_link(phone: &str, text: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let query = serde_urlencoded::to_string([("text", text)]).ok()?;
    Some(format!("https://wa.me/{}?{}", digits, query))
}

/// Pre-filled sponsorship inquiry for one Ramadan day.
pub fn sponsorship_link(phone: &str, day_number: i32, date: NaiveDate) -> Option<String> {
    let text = format!(
        "Assalamu alaikum, I would like to sponsor the iftar for Ramadan day {} ({}).",
        day_number,
        date.format("%B %-d, %Y")
    );
    whatsapp_link(phone, &text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_strips_formatting_from_phone() {
        let link = whatsapp_link("+1 (732) 322-5221", "Salaam").unwrap();
        assert!(link.starts_with("https://wa.me/17323225221?"));
    }

    #[test]
    fn test_text_is_url_encoded() {
        let link = whatsapp_link("7323225221", "Salaam, iftar & dates?").unwrap();
        assert!(link.contains("text=Salaam%2C+iftar+%26+dates%3F"));
    }

    #[test]
    fn test_no_digits_yields_none() {
        assert!(whatsapp_link("", "Salaam").is_none());
        assert!(whatsapp_link("call the office", "Salaam").is_none());
    }

    #[test]
    fn test_sponsorship_link_mentions_day_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let link = sponsorship_link("732-322-5221", 5, date).unwrap();
        assert!(link.contains("day+5"));
        assert!(link.contains("March+5%2C+2025"));
    }
}
