use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;
use std::fmt;

use crate::attendance::{AttendanceLog, DayRecord, Status};
use crate::calendar::HolidayCalendar;
use crate::stats::{self, SubjectStats};
use crate::timetable::{Timetable, weekday_name};

/// Rejection reasons for [`Tracker::mark_attendance`]. The stores are left
/// unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkError {
    /// The date is flagged as a holiday.
    Holiday(NaiveDate),
    /// The date's weekday has no subjects scheduled.
    NoSubjects(Weekday),
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkError::Holiday(date) => {
                write!(f, "{date} is a holiday, attendance cannot be recorded")
            }
            MarkError::NoSubjects(day) => {
                write!(f, "no subjects scheduled for {}", weekday_name(*day))
            }
        }
    }
}

impl std::error::Error for MarkError {}

/// One tracking session: the timetable, the holiday calendar and the
/// attendance log, owned together so the marking rules can see all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    timetable: Timetable,
    holidays: HolidayCalendar,
    log: AttendanceLog,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        timetable: Timetable,
        holidays: HolidayCalendar,
        log: AttendanceLog,
    ) -> Self {
        Self {
            timetable,
            holidays,
            log,
        }
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn timetable_mut(&mut self) -> &mut Timetable {
        &mut self.timetable
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn holidays_mut(&mut self) -> &mut HolidayCalendar {
        &mut self.holidays
    }

    pub fn log(&self) -> &AttendanceLog {
        &self.log
    }

    /// Record attendance for every subject scheduled on `date`'s weekday.
    ///
    /// Subjects default to `Present`; `overrides` flips individual subjects.
    /// Overrides naming subjects not on that day's timetable are ignored.
    /// Any previous record for the date is replaced wholesale. Returns the
    /// effective record written.
    pub fn mark_attendance(
        &mut self,
        date: NaiveDate,
        overrides: &DayRecord,
    ) -> Result<DayRecord, MarkError> {
        if self.holidays.is_holiday(date) {
            return Err(MarkError::Holiday(date));
        }
        let weekday = date.weekday();
        let subjects = self.timetable.subjects_for(weekday);
        if subjects.is_empty() {
            return Err(MarkError::NoSubjects(weekday));
        }

        let mut record = DayRecord::new();
        for subject in subjects {
            let status = overrides.get(subject).copied().unwrap_or(Status::Present);
            record.insert(subject.clone(), status);
        }
        debug!("recording {} subjects for {date}", record.len());
        self.log.record_day(date, record.clone());
        Ok(record)
    }

    /// Per-subject attendance percentages over the whole log.
    pub fn percentages(&self) -> Vec<SubjectStats> {
        stats::subject_percentages(&self.log)
    }
}
