//! # Deadline urgency classification
//!
//! Buckets the time left until a task's deadline into an [`Urgency`] and a
//! short display text. "Now" is always passed in, so the same inputs always
//! give the same answer; the view layer reads the clock through [`now_local`]
//! once per render or countdown tick.
//!
//! | Time left | Urgency | Text | Color |
//! |-----------|---------|------|-------|
//! | none or negative | `Overdue` | `Overdue` | red |
//! | < 60 min | `Critical` | `12m 5s` | red |
//! | < 24 h | `Urgent` | `5h remaining` | red |
//! | 1–3 whole days | `Soon` | `1 day remaining` / `2 days remaining` | yellow |
//! | 4–7 whole days | `Ok` | `6 days remaining` | blue |
//! | 8+ whole days | `Plenty` | `12 days remaining` | green |
//!
//! Only `Critical` changes its text every second, so it is the only bucket
//! that asks for a live refresh (see [`DeadlineStatus::refresh_interval`]).
//! The other open buckets change at hour or day boundaries;
//! [`next_refresh`] tells a displayed badge how long it may sleep before the
//! classification can differ.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime};

/// How often a critical countdown is re-evaluated.
pub const LIVE_TICK: Duration = Duration::from_secs(1);

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Longest wait between re-evaluations of an open, non-critical deadline.
/// Bounds the drift when the wall clock jumps or the machine sleeps.
pub const COARSE_TICK: Duration = Duration::from_secs(60);

/// Accepted textual deadline formats, tried in order.
const DEADLINE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Urgency bucket of a deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Urgency {
    Overdue,
    Critical,
    Urgent,
    Soon,
    Ok,
    Plenty,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Soon => "soon",
            Self::Ok => "ok",
            Self::Plenty => "plenty",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            Self::Overdue | Self::Critical | Self::Urgent => BadgeColor::Red,
            Self::Soon => BadgeColor::Yellow,
            Self::Ok => BadgeColor::Blue,
            Self::Plenty => BadgeColor::Green,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed badge palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Red,
    Yellow,
    Blue,
    Green,
}

impl BadgeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

/// Result of classifying one deadline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeadlineStatus {
    pub urgency: Urgency,
    pub text: String,
}

impl DeadlineStatus {
    pub fn color(&self) -> BadgeColor {
        self.urgency.color()
    }

    /// Overdue, critical and urgent badges are animated.
    pub fn pulses(&self) -> bool {
        matches!(
            self.urgency,
            Urgency::Overdue | Urgency::Critical | Urgency::Urgent
        )
    }

    /// `Some(LIVE_TICK)` while the countdown text changes every second and
    /// the task is still open; `None` otherwise.
    pub fn refresh_interval(&self, completed: bool) -> Option<Duration> {
        (self.urgency == Urgency::Critical && !completed).then_some(LIVE_TICK)
    }
}

/// Classify an optional textual deadline. Absent or malformed deadlines
/// produce no classification.
pub fn classify(deadline: Option<&str>, now: NaiveDateTime) -> Option<DeadlineStatus> {
    let at = parse_deadline(deadline?)?;
    Some(classify_at(at, now))
}

/// Classify a parsed deadline relative to `now`.
pub fn classify_at(deadline: NaiveDateTime, now: NaiveDateTime) -> DeadlineStatus {
    let diff_ms = (deadline - now).num_milliseconds();

    if diff_ms <= 0 {
        return DeadlineStatus {
            urgency: Urgency::Overdue,
            text: "Overdue".to_string(),
        };
    }

    let minutes = diff_ms / MS_PER_MINUTE;
    let hours = diff_ms / MS_PER_HOUR;
    let days = hours / 24;

    let (urgency, text) = if minutes < 60 {
        let seconds = (diff_ms % MS_PER_MINUTE) / MS_PER_SECOND;
        (Urgency::Critical, format!("{minutes}m {seconds}s"))
    } else if hours < 24 {
        (Urgency::Urgent, format!("{hours}h remaining"))
    } else if days <= 3 {
        let plural = if days > 1 { "s" } else { "" };
        (Urgency::Soon, format!("{days} day{plural} remaining"))
    } else if days <= 7 {
        (Urgency::Ok, format!("{days} days remaining"))
    } else {
        (Urgency::Plenty, format!("{days} days remaining"))
    };

    DeadlineStatus { urgency, text }
}

/// How long after `now` the classification of `deadline` can next change.
///
/// Critical deadlines return `live_tick`. Urgent ones wake just past the next
/// whole hour of remaining time, later buckets just past the next whole day,
/// both capped at [`COARSE_TICK`]. Overdue deadlines never change again and
/// return `None`.
pub fn next_refresh(
    deadline: NaiveDateTime,
    now: NaiveDateTime,
    live_tick: Duration,
) -> Option<Duration> {
    let diff_ms = (deadline - now).num_milliseconds();
    if diff_ms <= 0 {
        return None;
    }
    if diff_ms < MS_PER_HOUR {
        return Some(live_tick);
    }
    let unit = if diff_ms < MS_PER_DAY {
        MS_PER_HOUR
    } else {
        MS_PER_DAY
    };
    let until_boundary = (diff_ms % unit + 1) as u64;
    Some(Duration::from_millis(until_boundary).min(COARSE_TICK))
}

/// Parse a stored deadline as a local date-time.
///
/// Accepts the form's `YYYY-MM-DDTHH:MM` (optionally with seconds) and full
/// RFC 3339 timestamps, which are converted to local time.
pub fn parse_deadline(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    DEADLINE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}

/// Card footer rendering: "Mar 5, 2026, 02:30 PM".
pub fn format_deadline(at: NaiveDateTime) -> String {
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn at(offset: TimeDelta) -> DeadlineStatus {
        classify_at(now() + offset, now())
    }

    #[test]
    fn test_absent_deadline_has_no_status() {
        assert!(classify(None, now()).is_none());
        assert!(classify(Some(""), now()).is_none());
        assert!(classify(Some("not a date"), now()).is_none());
    }

    #[test]
    fn test_exactly_now_is_overdue() {
        let status = at(TimeDelta::zero());
        assert_eq!(status.urgency, Urgency::Overdue);
        assert_eq!(status.text, "Overdue");
        assert_eq!(at(TimeDelta::minutes(-5)).urgency, Urgency::Overdue);
    }

    #[test]
    fn test_critical_countdown_text() {
        let status = at(TimeDelta::minutes(30));
        assert_eq!(status.urgency, Urgency::Critical);
        assert_eq!(status.text, "30m 0s");

        let status = at(TimeDelta::seconds(12 * 60 + 5));
        assert_eq!(status.text, "12m 5s");

        let status = at(TimeDelta::seconds(59 * 60 + 59));
        assert_eq!(status.urgency, Urgency::Critical);
    }

    #[test]
    fn test_critical_text_decreases_as_now_advances() {
        let deadline = now() + TimeDelta::minutes(30);
        let first = classify_at(deadline, now());
        let later = classify_at(deadline, now() + TimeDelta::seconds(1));
        assert_eq!(first.text, "30m 0s");
        assert_eq!(later.text, "29m 59s");
    }

    #[test]
    fn test_urgent_hours() {
        let status = at(TimeDelta::minutes(60));
        assert_eq!(status.urgency, Urgency::Urgent);
        assert_eq!(status.text, "1h remaining");

        let status = at(TimeDelta::hours(23) + TimeDelta::minutes(59));
        assert_eq!(status.text, "23h remaining");
    }

    #[test]
    fn test_day_buckets() {
        let one = at(TimeDelta::hours(24));
        assert_eq!(one.urgency, Urgency::Soon);
        assert_eq!(one.text, "1 day remaining");

        let two = at(TimeDelta::days(2));
        assert_eq!(two.urgency, Urgency::Soon);
        assert_eq!(two.text, "2 days remaining");

        // 3 days 23 hours still counts as 3 whole days
        let three = at(TimeDelta::days(3) + TimeDelta::hours(23));
        assert_eq!(three.urgency, Urgency::Soon);

        assert_eq!(at(TimeDelta::days(4)).urgency, Urgency::Ok);
        let five = at(TimeDelta::days(5));
        assert_eq!(five.urgency, Urgency::Ok);
        assert_eq!(five.text, "5 days remaining");
        assert_eq!(at(TimeDelta::days(7)).urgency, Urgency::Ok);

        let ten = at(TimeDelta::days(10));
        assert_eq!(ten.urgency, Urgency::Plenty);
        assert_eq!(ten.text, "10 days remaining");
    }

    #[test]
    fn test_colors() {
        assert_eq!(Urgency::Overdue.color(), BadgeColor::Red);
        assert_eq!(Urgency::Critical.color(), BadgeColor::Red);
        assert_eq!(Urgency::Urgent.color(), BadgeColor::Red);
        assert_eq!(Urgency::Soon.color(), BadgeColor::Yellow);
        assert_eq!(Urgency::Ok.color(), BadgeColor::Blue);
        assert_eq!(Urgency::Plenty.color(), BadgeColor::Green);
    }

    #[test]
    fn test_refresh_only_for_open_critical() {
        let critical = at(TimeDelta::minutes(10));
        assert_eq!(critical.refresh_interval(false), Some(LIVE_TICK));
        assert_eq!(critical.refresh_interval(true), None);
        assert_eq!(at(TimeDelta::hours(3)).refresh_interval(false), None);
        assert_eq!(at(TimeDelta::minutes(-1)).refresh_interval(false), None);
    }

    #[test]
    fn test_next_refresh_wakes_into_critical() {
        // 61 minutes out: the badge must notice when it turns critical
        let deadline = now() + TimeDelta::minutes(61);
        let mut t = now();
        let mut wakes = 0;
        while classify_at(deadline, t).urgency == Urgency::Urgent {
            let wait = next_refresh(deadline, t, LIVE_TICK).unwrap();
            t += TimeDelta::from_std(wait).unwrap();
            wakes += 1;
        }
        assert_eq!(classify_at(deadline, t).urgency, Urgency::Critical);
        assert_eq!(wakes, 2);
        assert_eq!(t, deadline - TimeDelta::minutes(60) + TimeDelta::milliseconds(1));
        assert_eq!(next_refresh(deadline, t, LIVE_TICK), Some(LIVE_TICK));
    }

    #[test]
    fn test_next_refresh_stops_at_hour_boundary() {
        let deadline = now() + TimeDelta::hours(5) + TimeDelta::seconds(10);
        let wait = next_refresh(deadline, now(), LIVE_TICK).unwrap();
        assert_eq!(wait, Duration::from_millis(10_001));

        let later = now() + TimeDelta::from_std(wait).unwrap();
        assert_eq!(classify_at(deadline, later).text, "4h remaining");
    }

    #[test]
    fn test_next_refresh_reaches_overdue() {
        let deadline = now() + TimeDelta::milliseconds(500);
        assert_eq!(next_refresh(deadline, now(), LIVE_TICK), Some(LIVE_TICK));

        let later = now() + TimeDelta::from_std(LIVE_TICK).unwrap();
        assert_eq!(classify_at(deadline, later).urgency, Urgency::Overdue);
        assert_eq!(next_refresh(deadline, later, LIVE_TICK), None);
    }

    #[test]
    fn test_next_refresh_never_exceeds_coarse_tick() {
        for offset in [TimeDelta::hours(2), TimeDelta::days(3), TimeDelta::days(40)] {
            let wait = next_refresh(now() + offset, now(), LIVE_TICK).unwrap();
            assert!(wait <= COARSE_TICK);
        }
    }

    #[test]
    fn test_pulses() {
        assert!(at(TimeDelta::hours(2)).pulses());
        assert!(!at(TimeDelta::days(2)).pulses());
    }

    #[test]
    fn test_parse_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parse_deadline("2026-03-05T14:30"), Some(expected));
        assert_eq!(parse_deadline("2026-03-05T14:30:00"), Some(expected));
        assert!(parse_deadline("2026-03-05T14:30:00Z").is_some());
        assert!(parse_deadline("2026-13-05T14:30").is_none());
        assert!(parse_deadline("yesterday").is_none());
    }

    #[test]
    fn test_format_deadline() {
        let dt = NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_deadline(dt), "Mar 5, 2026, 02:30 PM");
    }
}
