// Date range module
// Immutable start/end pair produced by the range controller

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// A selected date range.
///
/// Values handed out by the controller always satisfy `end >= start`.
/// Ranges read from configuration may not, which is why the fields are
/// public and [`DateRange::is_consistent`] exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl DateRange {
    /// Create a range, clamping `end` up to `start` when it precedes it
    ///
    /// # Examples
    /// ```
    /// use date_range_picker::models::date_range::DateRange;
    /// use chrono::{Duration, Local};
    ///
    /// let start = Local::now();
    /// let range = DateRange::new(start, start - Duration::days(2));
    /// assert_eq!(range.end, start);
    /// ```
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A zero-length range at a single instant
    pub fn at(instant: DateTime<Local>) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    /// Whether the end date is not earlier than the start date
    pub fn is_consistent(&self) -> bool {
        self.end >= self.start
    }

    /// Get the length of the range
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_keeps_ordered_range() {
        let range = DateRange::new(noon(1), noon(3));
        assert_eq!(range.start, noon(1));
        assert_eq!(range.end, noon(3));
        assert!(range.is_consistent());
    }

    #[test]
    fn test_new_clamps_inverted_range() {
        let range = DateRange::new(noon(10), noon(5));
        assert_eq!(range.end, noon(10));
        assert_eq!(range.duration(), Duration::zero());
    }

    #[test]
    fn test_literal_inverted_range_is_inconsistent() {
        let range = DateRange {
            start: noon(10),
            end: noon(5),
        };
        assert!(!range.is_consistent());
    }

    #[test]
    fn test_at_is_zero_length() {
        let range = DateRange::at(noon(7));
        assert_eq!(range.duration(), Duration::zero());
        assert!(range.is_consistent());
    }

    #[test]
    fn test_serde_json_shape() {
        let range = DateRange::new(noon(1), noon(3));
        let json = serde_json::to_value(range).unwrap();
        assert!(json.get("start").is_some());
        assert!(json.get("end").is_some());

        let parsed: DateRange = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, range);
    }
}
