use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Attendance status for one subject on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Present,
    Absent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Present" => Some(Status::Present),
            "Absent" => Some(Status::Absent),
            _ => None,
        }
    }
}

/// The statuses recorded for a single date, keyed by subject.
pub type DayRecord = BTreeMap<String, Status>;

/// Historical record of per-date, per-subject attendance.
///
/// A date entry holds the complete status map from its marking session.
/// Entries are replaced wholesale and never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLog {
    entries: BTreeMap<NaiveDate, DayRecord>,
}

impl AttendanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record for a date wholesale. Prior marks for the date are
    /// discarded, not merged.
    pub fn record_day(&mut self, date: NaiveDate, record: DayRecord) {
        self.entries.insert(date, record);
    }

    pub fn record_for(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.entries.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Insert one (subject, status) pair, used when folding rows at load.
    pub(crate) fn insert_status(&mut self, date: NaiveDate, subject: String, status: Status) {
        self.entries.entry(date).or_default().insert(subject, status);
    }

    /// Date-ordered iteration over all recorded days.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &DayRecord)> {
        self.entries.iter().map(|(date, record)| (*date, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
