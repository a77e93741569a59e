use chrono::{DateTime, Duration, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[must_use]
pub fn format_time_spent(span: Duration) -> String {
    exam_core::time::format_span(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::time::fixed_now;

    #[test]
    fn formats_fixed_timestamp() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13");
        assert_eq!(format_time_spent(Duration::seconds(605)), "10:05");
    }
}
