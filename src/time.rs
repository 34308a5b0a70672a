//! Discrete simulation time. A [`SimTime`] is a (day, hour) instant; a
//! [`SimTimeWindow`] is a set of instants described by independent hour,
//! absolute-day and week-day filters. A window with no filter on some axis
//! admits every value on that axis.

pub const HOURS_IN_A_DAY: u8 = 24;
pub const DAYS_IN_A_WEEK: u32 = 7;
pub const DAYS_IN_A_YEAR: u32 = 365;

/// Week days at or past this value count as the weekend.
pub const WEEKEND_START: u32 = 5;

/// A single simulated instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SimTime {
    pub day: u32,
    pub hour: u8,
}

impl SimTime {
    #[must_use]
    pub fn new(day: u32, hour: u8) -> SimTime {
        debug_assert!(hour < HOURS_IN_A_DAY);
        SimTime { day, hour }
    }

    /// The day of the week in `0..7`, with day 0 of the simulation falling on
    /// week day 0.
    #[must_use]
    pub fn week_day(&self) -> u32 {
        self.day % DAYS_IN_A_WEEK
    }

    #[must_use]
    pub fn is_weekend(&self) -> bool {
        self.week_day() >= WEEKEND_START
    }
}

/// A set of simulated instants. An instant is in the window iff its hour,
/// absolute day and week day each pass the corresponding filter; an absent
/// filter passes everything.
///
/// Day filters may hold duplicates (gathering-day draws are with
/// replacement); membership is unaffected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimTimeWindow {
    hours: Option<Vec<u8>>,
    days: Option<Vec<u32>>,
    week_days: Option<Vec<u32>>,
}

impl SimTimeWindow {
    /// Creates a window admitting every instant.
    #[must_use]
    pub fn new() -> SimTimeWindow {
        SimTimeWindow::default()
    }

    #[must_use]
    pub fn with_hours(mut self, hours: impl IntoIterator<Item = u8>) -> SimTimeWindow {
        self.hours = Some(hours.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: impl IntoIterator<Item = u32>) -> SimTimeWindow {
        self.days = Some(days.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_week_days(mut self, week_days: impl IntoIterator<Item = u32>) -> SimTimeWindow {
        self.week_days = Some(week_days.into_iter().collect());
        self
    }

    /// Membership test for a single instant.
    #[must_use]
    pub fn contains(&self, time: SimTime) -> bool {
        if let Some(hours) = &self.hours {
            if !hours.contains(&time.hour) {
                return false;
            }
        }
        if let Some(days) = &self.days {
            if !days.contains(&time.day) {
                return false;
            }
        }
        if let Some(week_days) = &self.week_days {
            if !week_days.contains(&time.week_day()) {
                return false;
            }
        }
        true
    }

    /// The absolute-day filter, if one is set.
    #[must_use]
    pub fn days(&self) -> Option<&[u32]> {
        self.days.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_contains_everything() {
        let w = SimTimeWindow::new();
        assert!(w.contains(SimTime::new(0, 0)));
        assert!(w.contains(SimTime::new(364, 23)));
    }

    #[test]
    fn hour_filter() {
        let w = SimTimeWindow::new().with_hours(8..18);
        assert!(w.contains(SimTime::new(3, 8)));
        assert!(w.contains(SimTime::new(3, 17)));
        assert!(!w.contains(SimTime::new(3, 18)));
        assert!(!w.contains(SimTime::new(3, 7)));
    }

    #[test]
    fn week_day_filter() {
        let w = SimTimeWindow::new().with_week_days(0..5);
        // Day 7 is week day 0, day 12 is week day 5.
        assert!(w.contains(SimTime::new(7, 12)));
        assert!(!w.contains(SimTime::new(12, 12)));
    }

    #[test]
    fn all_filters_must_pass() {
        let w = SimTimeWindow::new()
            .with_hours(19..24)
            .with_days(vec![10, 40, 40, 100]);
        assert!(w.contains(SimTime::new(40, 19)));
        assert!(!w.contains(SimTime::new(40, 18)));
        assert!(!w.contains(SimTime::new(41, 19)));
    }

    #[test]
    fn weekend_predicate() {
        assert!(!SimTime::new(4, 0).is_weekend());
        assert!(SimTime::new(5, 0).is_weekend());
        assert!(SimTime::new(6, 0).is_weekend());
        assert!(!SimTime::new(7, 0).is_weekend());
    }
}
