use chrono::{DateTime, NaiveDate, Utc};
use colored::{ColoredString, Colorize};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Urgent,
    Soon,
    Normal,
}

impl Urgency {
    pub fn classify(days: i64) -> Self {
        match days {
            ..=7 => Urgency::Urgent,
            8..=30 => Urgency::Soon,
            _ => Urgency::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Soon => "soon",
            Urgency::Normal => "normal",
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Urgency::Urgent => text.red(),
            Urgency::Soon => text.yellow(),
            Urgency::Normal => text.dimmed(),
        }
    }
}

/// Whole days until midnight UTC of `deadline`, rounded up.
pub fn days_until(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let deadline_start = deadline.and_time(chrono::NaiveTime::MIN).and_utc();
    let millis = (deadline_start - now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

pub fn deadline_label(days: i64) -> String {
    if days > 0 {
        format!("{days} days left")
    } else {
        "Deadline passed".to_string()
    }
}
