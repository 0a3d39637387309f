use chrono::Weekday;
use std::collections::HashMap;

/// Canonical Monday-first week, used for iteration and persistence order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English day name. chrono's `Display` gives the three-letter form.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekly mapping of weekday to scheduled subjects.
///
/// Every weekday is always present; an unscheduled day maps to an empty list
/// so lookups never fail. Subject order is preserved as entered and
/// duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    subjects: HashMap<Weekday, Vec<String>>,
}

impl Default for Timetable {
    fn default() -> Self {
        let mut subjects = HashMap::with_capacity(WEEKDAYS.len());
        for day in WEEKDAYS {
            subjects.insert(day, Vec::new());
        }
        Self { subjects }
    }
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single weekday's subjects from a raw comma-separated entry.
    ///
    /// Pieces are trimmed; blank input (and blank pieces from stray commas)
    /// yield nothing.
    pub fn set_day(&mut self, day: Weekday, raw: &str) {
        self.subjects.insert(day, parse_subjects(raw));
    }

    /// Replace the whole week. Weekdays missing from `entries` reset to empty.
    pub fn replace_week<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Weekday, S)>,
        S: AsRef<str>,
    {
        for day in WEEKDAYS {
            self.subjects.insert(day, Vec::new());
        }
        for (day, raw) in entries {
            self.set_day(day, raw.as_ref());
        }
    }

    /// Subjects scheduled for a weekday; empty when nothing is scheduled.
    pub fn subjects_for(&self, day: Weekday) -> &[String] {
        self.subjects.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Comma-and-space joined subject list, as shown in forms and persisted.
    pub fn joined(&self, day: Weekday) -> String {
        self.subjects_for(day).join(", ")
    }

    /// True when no weekday has any subject scheduled.
    pub fn is_empty(&self) -> bool {
        WEEKDAYS.into_iter().all(|day| self.subjects_for(day).is_empty())
    }

    /// Monday-first iteration over the week.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        WEEKDAYS.into_iter().map(|day| (day, self.subjects_for(day)))
    }
}

fn parse_subjects(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
