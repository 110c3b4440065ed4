//! Human-readable date labels for the dashboard tables.

use chrono::{DateTime, Utc};

/// Dates further out than this are shown as a calendar date.
const EXPIRY_CALENDAR_THRESHOLD_DAYS: i64 = 30;

/// Label for a link's expiry column.
///
/// `"Never"` without an expiry, `"Expired"` once reached, a calendar date
/// when more than thirty days out, otherwise `"Expires in N days"`.
pub fn expiry_label(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(expires_at) = expires_at else {
        return "Never".to_string();
    };
    if expires_at <= now {
        return "Expired".to_string();
    }

    let days = (expires_at - now).num_days();
    if days > EXPIRY_CALENDAR_THRESHOLD_DAYS {
        calendar_date(expires_at)
    } else {
        format!("Expires in {days} {}", plural(days, "day", "days"))
    }
}

/// Relative label for a past instant: `"Today"`, `"Yesterday"`, `"3 days ago"`,
/// `"2 weeks ago"`, or a calendar date after a month.
pub fn relative_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days();
    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{d} days ago"),
        d if d < 30 => {
            let weeks = d / 7;
            format!("{weeks} {} ago", plural(weeks, "week", "weeks"))
        }
        _ => calendar_date(date),
    }
}

/// `"Jun 5, 2024"`.
pub fn calendar_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn plural<'a>(n: i64, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_expiry_label() {
        assert_eq!(expiry_label(None, now()), "Never");
        assert_eq!(expiry_label(Some(now()), now()), "Expired");
        assert_eq!(
            expiry_label(Some(now() - Duration::days(2)), now()),
            "Expired"
        );
        assert_eq!(
            expiry_label(Some(now() + Duration::hours(5)), now()),
            "Expires in 0 days"
        );
        assert_eq!(
            expiry_label(Some(now() + Duration::hours(30)), now()),
            "Expires in 1 day"
        );
        assert_eq!(
            expiry_label(Some(now() + Duration::days(30)), now()),
            "Expires in 30 days"
        );
        assert_eq!(
            expiry_label(Some(now() + Duration::days(45)), now()),
            "Jul 20, 2024"
        );
    }

    #[test]
    fn test_relative_date() {
        assert_eq!(relative_date(now() - Duration::hours(3), now()), "Today");
        assert_eq!(relative_date(now() - Duration::hours(30), now()), "Yesterday");
        assert_eq!(relative_date(now() - Duration::days(4), now()), "4 days ago");
        assert_eq!(relative_date(now() - Duration::days(8), now()), "1 week ago");
        assert_eq!(relative_date(now() - Duration::days(21), now()), "3 weeks ago");
        assert_eq!(relative_date(now() - Duration::days(40), now()), "Apr 26, 2024");
    }
}
