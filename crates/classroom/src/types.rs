use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub name: String,
    pub grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Case-insensitive comparison that ignores surrounding whitespace in `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// One line of the class report. `average` is `None` for a student without grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallStatistics {
    pub max_average: f64,
    pub min_average: f64,
    /// Mean of the per-student averages, kept at full precision.
    pub mean_of_averages: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub students: Vec<ReportLine>,
    pub overall: Option<OverallStatistics>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopPerformer<'a> {
    pub student: &'a Student,
    pub average: f64,
}

#[derive(Error, Debug)]
pub enum ClassroomError {
    #[error("Student '{0}' already exists.")]
    DuplicateStudent(String),

    #[error("Student '{0}' not found.")]
    StudentNotFound(String),

    #[error("Invalid grade. Grade must be between 0 and 100.")]
    OutOfRange(f64),

    #[error("Invalid input. Please enter a valid number or 'done'.")]
    NotANumber(String),

    #[error("No data available.")]
    NoData,

    #[error("Student name cannot be empty.")]
    InvalidName,

    #[error("Invalid birth year '{0}'. Please enter a whole number.")]
    NotAYear(String),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClassroomError>;
