//! Due-date urgency classification
//!
//! Due dates are bucketed relative to a fixed "today" that the caller captures
//! once per render, so every todo in one render sees the same day.
//!
//! Weeks begin on a configurable weekday (Monday by default). A date belongs to
//! the week starting on the most recent week-start day on or before it.

use crate::error::{RenderError, Result};
use crate::style::Color;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::fmt;

/// Storage format of due dates
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for past-due and far-future dates (e.g. "Mon Jan 2")
pub const DUE_DISPLAY_FORMAT: &str = "%a %b %-d";

/// Urgency of a due date relative to today
///
/// Uses lowercase naming to match the labels printed for each bucket.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyBucket {
    /// No due date
    none,
    today,
    tomorrow,
    /// Falls in the week after the current one
    nextweek,
    /// Later in the current week, after tomorrow
    thisweek,
    /// Strictly before today
    pastdue,
    /// Anything beyond next week
    future,
}

impl UrgencyBucket {
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBucket::none => "none",
            UrgencyBucket::today => "today",
            UrgencyBucket::tomorrow => "tomorrow",
            UrgencyBucket::nextweek => "nextweek",
            UrgencyBucket::thisweek => "thisweek",
            UrgencyBucket::pastdue => "pastdue",
            UrgencyBucket::future => "future",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            UrgencyBucket::none => Color::White,
            UrgencyBucket::today => Color::BrightRed,
            UrgencyBucket::tomorrow => Color::Yellow,
            UrgencyBucket::nextweek => Color::Green,
            UrgencyBucket::thisweek => Color::BrightYellow,
            UrgencyBucket::pastdue => Color::Red,
            UrgencyBucket::future => Color::BrightGreen,
        }
    }
}

impl fmt::Display for UrgencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified due date and the text shown in the due column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDisplay {
    pub bucket: UrgencyBucket,
    pub text: String,
}

/// Parse a stored due date
///
/// Anything other than `YYYY-MM-DD` means the data file was written by
/// something else or got damaged, and is reported as corrupt data.
/// chrono alone accepts one-digit fields, signs and short years, so the
/// shape is checked byte by byte first.
pub fn parse_due(due: &str) -> Result<NaiveDate> {
    let corrupt = |reason: String| {
        tracing::debug!(due, %reason, "due date is not YYYY-MM-DD");
        RenderError::CorruptDueDate {
            value: due.to_string(),
            reason,
        }
    };

    if !has_due_date_shape(due) {
        return Err(corrupt("expected YYYY-MM-DD".to_string()));
    }
    NaiveDate::parse_from_str(due, DUE_DATE_FORMAT).map_err(|cause| corrupt(cause.to_string()))
}

/// Exactly ten ASCII bytes: four digits, '-', two digits, '-', two digits
fn has_due_date_shape(due: &str) -> bool {
    let bytes = due.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Classify with Monday as the first day of the week
pub fn classify(due: Option<&str>, now: NaiveDate) -> Result<DueDisplay> {
    DueClassifier::new(now).classify(due)
}

/// Classifies due dates against a fixed day and week convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueClassifier {
    today: NaiveDate,
    week_start: Weekday,
}

impl DueClassifier {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_week_start(today, Weekday::Mon)
    }

    pub fn with_week_start(today: NaiveDate, week_start: Weekday) -> Self {
        Self { today, week_start }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Classify a stored due date; absent and empty dates are `none`
    pub fn classify(&self, due: Option<&str>) -> Result<DueDisplay> {
        match due.filter(|due| !due.is_empty()) {
            None => Ok(DueDisplay {
                bucket: UrgencyBucket::none,
                text: " ".to_string(),
            }),
            Some(due) => Ok(self.classify_date(parse_due(due)?)),
        }
    }

    pub fn classify_date(&self, due: NaiveDate) -> DueDisplay {
        let bucket = self.bucket(due);
        let text = match bucket {
            UrgencyBucket::pastdue | UrgencyBucket::future => {
                due.format(DUE_DISPLAY_FORMAT).to_string()
            }
            _ => bucket.label().to_string(),
        };
        DueDisplay { bucket, text }
    }

    /// First match wins: today, tomorrow, nextweek, thisweek, pastdue, future
    pub fn bucket(&self, due: NaiveDate) -> UrgencyBucket {
        let this_week = self.week_of(self.today);
        if due == self.today {
            UrgencyBucket::today
        } else if self.today.succ_opt() == Some(due) {
            UrgencyBucket::tomorrow
        } else if this_week.checked_add_days(Days::new(7)) == Some(self.week_of(due)) {
            UrgencyBucket::nextweek
        } else if due > self.today && self.week_of(due) == this_week {
            UrgencyBucket::thisweek
        } else if due < self.today {
            UrgencyBucket::pastdue
        } else {
            UrgencyBucket::future
        }
    }

    /// First day of the week containing `date`
    fn week_of(&self, date: NaiveDate) -> NaiveDate {
        let offset = (date.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }
}
