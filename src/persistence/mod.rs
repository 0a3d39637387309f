use std::fmt;
use std::io;

/// One of the three persisted tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Timetable,
    Holidays,
    Attendance,
}

impl Artifact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Artifact::Timetable => "timetable",
            Artifact::Holidays => "holidays",
            Artifact::Attendance => "attendance",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Timetable => "timetable.csv",
            Artifact::Holidays => "holidays.csv",
            Artifact::Attendance => "attendance.csv",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum PersistenceError {
    /// The artifact file could not be opened, created or flushed.
    Io(Artifact, io::Error),
    /// The csv layer failed while writing the artifact.
    Csv(Artifact, csv::Error),
    /// The artifact file exists but its content does not parse.
    Malformed(Artifact, String),
}

impl PersistenceError {
    /// Which artifact the failure belongs to.
    pub fn artifact(&self) -> Artifact {
        match self {
            PersistenceError::Io(artifact, _)
            | PersistenceError::Csv(artifact, _)
            | PersistenceError::Malformed(artifact, _) => *artifact,
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(artifact, err) => {
                write!(f, "{artifact} artifact: io error: {err}")
            }
            PersistenceError::Csv(artifact, err) => {
                write!(f, "{artifact} artifact: csv error: {err}")
            }
            PersistenceError::Malformed(artifact, msg) => {
                write!(f, "{artifact} artifact is malformed: {msg}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(_, err) => Some(err),
            PersistenceError::Csv(_, err) => Some(err),
            PersistenceError::Malformed(_, _) => None,
        }
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub mod file;

pub use file::{CsvStore, LoadOutcome};
