pub mod attendance;
pub mod calendar;
pub mod persistence;
pub mod stats;
pub mod timetable;
pub mod tracker;

pub use attendance::{AttendanceLog, DayRecord, Status};
pub use calendar::HolidayCalendar;
pub use persistence::{Artifact, CsvStore, LoadOutcome, PersistenceError, PersistenceResult};
pub use stats::{SubjectStats, subject_percentages};
pub use timetable::{Timetable, WEEKDAYS, weekday_name};
pub use tracker::{MarkError, Tracker};
