use crate::TimePeriod;

/// Buckets a free-form event time into a coarse period of the day.
///
/// Accepts clock times like `9:00 AM` or `12:30pm`. `All day`, anything
/// unparsable and hours that land before 6 AM all end up as
/// [`TimePeriod::Other`].
pub fn classify<S: AsRef<str>>(time: S) -> TimePeriod {
    let time = time.as_ref();

    if time.eq_ignore_ascii_case("all day") {
        return TimePeriod::Other;
    }

    match parse_hour(time) {
        Some(6..=11) => TimePeriod::Morning,
        Some(12..=17) => TimePeriod::Afternoon,
        Some(18..=23) => TimePeriod::Evening,
        _ => TimePeriod::Other,
    }
}

/// Hour on a 24-hour clock of the first `H:MM AM`/`HH:MM PM` found anywhere
/// in `time`, so `9:00 AM - 10:00 AM` and `Starts 9:00 AM` both read as 9.
fn parse_hour(time: &str) -> Option<u32> {
    let bytes = time.as_bytes();

    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b':')
        .find_map(|(colon, _)| hour_around(bytes, colon))
}

fn hour_around(bytes: &[u8], colon: usize) -> Option<u32> {
    let head = &bytes[..colon];
    let hour_len = head.iter().rev().take_while(|b| b.is_ascii_digit()).count();
    if !(1..=2).contains(&hour_len) {
        return None;
    }

    let hour = head[colon - hour_len..]
        .iter()
        .fold(0, |hour, b| hour * 10 + u32::from(b - b'0'));

    let tail = &bytes[colon + 1..];
    let minute_len = tail.iter().take_while(|b| b.is_ascii_digit()).count();
    if minute_len != 2 {
        return None;
    }

    let rest = &tail[minute_len..];
    let spaces = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let rest = &rest[spaces..];

    let meridian = rest.get(..2)?;
    // `9:00 AMish` is not a meridian.
    if rest.get(2).is_some_and(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let pm = if meridian.eq_ignore_ascii_case(b"pm") {
        true
    } else if meridian.eq_ignore_ascii_case(b"am") {
        false
    } else {
        return None;
    };

    Some(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_clock_times() {
        assert_eq!(classify("9:00 AM"), TimePeriod::Morning);
        assert_eq!(classify("6:00 AM"), TimePeriod::Morning);
        assert_eq!(classify("11:59 AM"), TimePeriod::Morning);
        assert_eq!(classify("12:00 PM"), TimePeriod::Afternoon);
        assert_eq!(classify("12:30 PM"), TimePeriod::Afternoon);
        assert_eq!(classify("5:30 PM"), TimePeriod::Afternoon);
        assert_eq!(classify("6:00 PM"), TimePeriod::Evening);
        assert_eq!(classify("11:45 PM"), TimePeriod::Evening);
    }

    #[test]
    fn midnight_and_early_hours_are_other() {
        assert_eq!(classify("12:00 AM"), TimePeriod::Other);
        assert_eq!(classify("5:59 AM"), TimePeriod::Other);
        assert_eq!(classify("0:30 AM"), TimePeriod::Other);
    }

    #[test]
    fn meridian_is_case_insensitive_and_space_is_optional() {
        assert_eq!(classify("9:00am"), TimePeriod::Morning);
        assert_eq!(classify("2:15 pm"), TimePeriod::Afternoon);
        assert_eq!(classify("07:45Pm"), TimePeriod::Evening);
        assert_eq!(classify(" 10:00 AM "), TimePeriod::Morning);
    }

    #[test]
    fn all_day_is_other() {
        assert_eq!(classify("All day"), TimePeriod::Other);
        assert_eq!(classify("ALL DAY"), TimePeriod::Other);
        assert_eq!(classify("all day"), TimePeriod::Other);
    }

    #[test]
    fn malformed_input_is_other() {
        for time in [
            "",
            "noon",
            "9 AM",
            "9:0 AM",
            "9:00",
            "9:00 XM",
            "9:00 AMish",
            "123:00 PM",
            ":30 PM",
            "13:00 PM",
            "9:ÄÖ AM",
        ] {
            assert_eq!(classify(time), TimePeriod::Other, "{time:?}");
        }
    }

    #[test]
    fn finds_times_inside_free_text() {
        assert_eq!(classify("9:00 AM - 10:00 AM"), TimePeriod::Morning);
        assert_eq!(classify("Starts 9:00 AM"), TimePeriod::Morning);
        assert_eq!(classify("9:00 AM (tentative)"), TimePeriod::Morning);
        assert_eq!(classify("around 3:15pm, maybe later"), TimePeriod::Afternoon);
        assert_eq!(classify("a9:00 AM"), TimePeriod::Morning);
    }

    #[test]
    fn first_complete_time_wins() {
        assert_eq!(classify("Doors 7:30pm, show 9:00am"), TimePeriod::Evening);
        // `25:00` has no meridian, so the scan moves on.
        assert_eq!(classify("not 25:00 but 9:00 AM"), TimePeriod::Morning);
        assert_eq!(classify("ratio 3:1 then 2:00 PM"), TimePeriod::Afternoon);
    }

    #[test]
    fn out_of_range_am_hours_still_bucket_by_value() {
        // Nothing rejects a 13 o'clock AM, it simply reads as 13:00.
        assert_eq!(classify("13:00 AM"), TimePeriod::Afternoon);
    }
}
