use chrono::Duration;

/// `4m 05s`, or `42s` under a minute. Negative spans read as zero.
#[must_use]
pub fn format_duration(value: Duration) -> String {
    let seconds = value.num_seconds().max(0);
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    if minutes == 0 {
        format!("{remainder}s")
    } else {
        format!("{minutes}m {remainder:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::seconds(245)), "4m 05s");
        assert_eq!(format_duration(Duration::seconds(-3)), "0s");
    }
}
