use std::fs::File;
use std::io;
use std::path::PathBuf;

use chrono::{NaiveDate, Weekday};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{Artifact, PersistenceError, PersistenceResult};
use crate::attendance::{AttendanceLog, Status};
use crate::calendar::HolidayCalendar;
use crate::timetable::{Timetable, WEEKDAYS, weekday_name};
use crate::tracker::Tracker;

/// One `timetable.csv` row: a weekday and its comma-joined subject list.
#[derive(Serialize, Deserialize)]
struct TimetableRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Subjects")]
    subjects: String,
}

/// One `holidays.csv` row.
#[derive(Serialize, Deserialize)]
struct HolidayRow {
    #[serde(rename = "Holiday")]
    holiday: String,
}

/// One `attendance.csv` row: a single (date, subject) pair.
#[derive(Serialize, Deserialize)]
struct AttendanceRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Subject")]
    subject: String,
    #[serde(rename = "Status")]
    status: String,
}

/// Result of a full load: whatever parsed, plus per-artifact failures.
///
/// A missing file is not a failure (that store starts empty); a present but
/// unparseable file contributes an empty store and one failure.
pub struct LoadOutcome {
    pub tracker: Tracker,
    pub failures: Vec<PersistenceError>,
}

/// Reads and writes the three artifacts inside one directory.
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, artifact: Artifact) -> PathBuf {
        self.dir.join(artifact.file_name())
    }

    /// Write all three artifacts wholesale. Stops at the first artifact that
    /// fails; the error names it. Artifacts already written stay written.
    pub fn save(&self, tracker: &Tracker) -> PersistenceResult<()> {
        self.save_timetable(tracker.timetable())?;
        self.save_holidays(tracker.holidays())?;
        self.save_attendance(tracker.log())?;
        info!("saved all artifacts to {}", self.dir.display());
        Ok(())
    }

    /// Load all three artifacts independently. A failure in one artifact is
    /// collected while the others still load.
    pub fn load(&self) -> LoadOutcome {
        let mut failures = Vec::new();

        let timetable = match self.load_timetable() {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                failures.push(err);
                Timetable::default()
            }
        };
        let holidays = match self.load_holidays() {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                failures.push(err);
                HolidayCalendar::default()
            }
        };
        let log = match self.load_attendance() {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                failures.push(err);
                AttendanceLog::default()
            }
        };

        if !failures.is_empty() {
            warn!("{} artifact(s) failed to load", failures.len());
        }
        LoadOutcome {
            tracker: Tracker::from_parts(timetable, holidays, log),
            failures,
        }
    }

    pub fn save_timetable(&self, timetable: &Timetable) -> PersistenceResult<()> {
        let artifact = Artifact::Timetable;
        let file = create(self.path(artifact), artifact)?;
        let mut writer = csv::Writer::from_writer(file);
        for day in WEEKDAYS {
            writer
                .serialize(TimetableRow {
                    day: weekday_name(day).to_string(),
                    subjects: timetable.joined(day),
                })
                .map_err(|err| PersistenceError::Csv(artifact, err))?;
        }
        flush(writer, artifact)
    }

    pub fn save_holidays(&self, holidays: &HolidayCalendar) -> PersistenceResult<()> {
        let artifact = Artifact::Holidays;
        let file = create(self.path(artifact), artifact)?;
        let mut writer = csv::Writer::from_writer(file);
        if holidays.is_empty() {
            // serialize only emits the header alongside a record
            writer
                .write_record(["Holiday"])
                .map_err(|err| PersistenceError::Csv(artifact, err))?;
        }
        for date in holidays.iter() {
            writer
                .serialize(HolidayRow {
                    holiday: format_date(date),
                })
                .map_err(|err| PersistenceError::Csv(artifact, err))?;
        }
        flush(writer, artifact)
    }

    pub fn save_attendance(&self, log: &AttendanceLog) -> PersistenceResult<()> {
        let artifact = Artifact::Attendance;
        let file = create(self.path(artifact), artifact)?;
        let mut writer = csv::Writer::from_writer(file);
        let mut rows = 0usize;
        for (date, record) in log.iter() {
            for (subject, status) in record {
                writer
                    .serialize(AttendanceRow {
                        date: format_date(date),
                        subject: subject.clone(),
                        status: status.as_str().to_string(),
                    })
                    .map_err(|err| PersistenceError::Csv(artifact, err))?;
                rows += 1;
            }
        }
        if rows == 0 {
            writer
                .write_record(["Date", "Subject", "Status"])
                .map_err(|err| PersistenceError::Csv(artifact, err))?;
        }
        flush(writer, artifact)
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_timetable(&self) -> PersistenceResult<Option<Timetable>> {
        let artifact = Artifact::Timetable;
        let Some(file) = open(self.path(artifact), artifact)? else {
            return Ok(None);
        };
        let mut reader = csv::Reader::from_reader(file);
        let mut timetable = Timetable::default();
        for row in reader.deserialize::<TimetableRow>() {
            let row = row.map_err(|err| malformed(artifact, err))?;
            let day: Weekday = row.day.trim().parse().map_err(|_| {
                PersistenceError::Malformed(artifact, format!("unknown day name '{}'", row.day))
            })?;
            timetable.set_day(day, &row.subjects);
        }
        debug!("loaded timetable");
        Ok(Some(timetable))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_holidays(&self) -> PersistenceResult<Option<HolidayCalendar>> {
        let artifact = Artifact::Holidays;
        let Some(file) = open(self.path(artifact), artifact)? else {
            return Ok(None);
        };
        let mut reader = csv::Reader::from_reader(file);
        let mut holidays = HolidayCalendar::default();
        for row in reader.deserialize::<HolidayRow>() {
            let row = row.map_err(|err| malformed(artifact, err))?;
            holidays.add_holiday(parse_date(artifact, &row.holiday)?);
        }
        debug!("loaded {} holidays", holidays.len());
        Ok(Some(holidays))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_attendance(&self) -> PersistenceResult<Option<AttendanceLog>> {
        let artifact = Artifact::Attendance;
        let Some(file) = open(self.path(artifact), artifact)? else {
            return Ok(None);
        };
        let mut reader = csv::Reader::from_reader(file);
        let mut log = AttendanceLog::default();
        for row in reader.deserialize::<AttendanceRow>() {
            let row = row.map_err(|err| malformed(artifact, err))?;
            let date = parse_date(artifact, &row.date)?;
            let status = Status::from_str(row.status.trim()).ok_or_else(|| {
                PersistenceError::Malformed(artifact, format!("invalid status '{}'", row.status))
            })?;
            log.insert_status(date, row.subject, status);
        }
        debug!("loaded attendance for {} dates", log.len());
        Ok(Some(log))
    }
}

fn create(path: PathBuf, artifact: Artifact) -> PersistenceResult<File> {
    File::create(&path).map_err(|err| PersistenceError::Io(artifact, err))
}

fn open(path: PathBuf, artifact: Artifact) -> PersistenceResult<Option<File>> {
    match File::open(&path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(PersistenceError::Io(artifact, err)),
    }
}

fn flush(mut writer: csv::Writer<File>, artifact: Artifact) -> PersistenceResult<()> {
    writer
        .flush()
        .map_err(|err| PersistenceError::Io(artifact, err))
}

fn malformed(artifact: Artifact, err: csv::Error) -> PersistenceError {
    PersistenceError::Malformed(artifact, err.to_string())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(artifact: Artifact, input: &str) -> PersistenceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|err| {
        PersistenceError::Malformed(artifact, format!("invalid date '{input}': {err}"))
    })
}
