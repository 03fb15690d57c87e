use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Store lookup key for a selected date.
///
/// The key is the UTC calendar day of `date`, so a local midnight east of
/// UTC maps to the previous day. No selection yields an empty key, which
/// matches nothing in any store.
pub fn date_key<Tz: TimeZone>(date: Option<&DateTime<Tz>>) -> String {
    match date {
        Some(date) => date
            .with_timezone(&Utc)
            .format(DATE_KEY_FORMAT)
            .to_string(),
        None => String::new(),
    }
}

/// Parses a `YYYY-MM-DD` key back into a calendar date.
pub fn parse_date_key<S: AsRef<str>>(key: S) -> Option<NaiveDate> {
    let key = key.as_ref();

    // chrono accepts unpadded fields, keys must be canonical.
    if key.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn local_midnight(offset_hours: i32, y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 0, 0, 0)
            .unwrap()
    }

    #[test]
    fn no_selection_is_empty() {
        assert_eq!(date_key::<Utc>(None), "");
    }

    #[test]
    fn utc_midnight_keeps_its_day() {
        let date = local_midnight(0, 2025, 5, 15);
        assert_eq!(date_key(Some(&date)), "2025-05-15");
    }

    #[test]
    fn west_of_utc_keeps_its_day() {
        let date = local_midnight(-5, 2025, 5, 15);
        assert_eq!(date_key(Some(&date)), "2025-05-15");
    }

    #[test]
    fn east_of_utc_shifts_back_a_day() {
        let date = local_midnight(2, 2025, 5, 15);
        assert_eq!(date_key(Some(&date)), "2025-05-14");

        let new_year = local_midnight(9, 2025, 1, 1);
        assert_eq!(date_key(Some(&new_year)), "2024-12-31");
    }

    #[test]
    fn parses_canonical_keys_only() {
        assert_eq!(
            parse_date_key("2025-05-02"),
            NaiveDate::from_ymd_opt(2025, 5, 2)
        );
        assert_eq!(parse_date_key("2025-5-2"), None);
        assert_eq!(parse_date_key("2025-02-30"), None);
        assert_eq!(parse_date_key("yesterday"), None);
        assert_eq!(parse_date_key(""), None);
    }
}
