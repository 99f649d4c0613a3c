/// Renders elapsed seconds as `H:MM:SS`, prefixed with a day count once the
/// duration crosses 24 hours (`1 day, 2:03:04`, `2 days, 0:00:00`).
///
/// Hours are not zero-padded; minutes and seconds are. Sub-second precision
/// is truncated before this function is called.
pub fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;

    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_a_minute() {
        assert_eq!(format_uptime(0), "0:00:00");
        assert_eq!(format_uptime(5), "0:00:05");
    }

    #[test]
    fn test_hours_not_padded() {
        assert_eq!(format_uptime(3 * 3600 + 7 * 60 + 9), "3:07:09");
        assert_eq!(format_uptime(23 * 3600 + 59 * 60 + 59), "23:59:59");
    }

    #[test]
    fn test_single_day_is_singular() {
        assert_eq!(format_uptime(86_400 + 2 * 3600 + 3 * 60 + 4), "1 day, 2:03:04");
    }

    #[test]
    fn test_multiple_days_are_plural() {
        assert_eq!(format_uptime(2 * 86_400), "2 days, 0:00:00");
        assert_eq!(format_uptime(10 * 86_400 + 60), "10 days, 0:01:00");
    }
}
