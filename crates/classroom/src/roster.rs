use crate::constants::{MAX_GRADE, MIN_GRADE};
use crate::types::{ClassroomError, Result, Student};
use log::debug;

/// In-memory students for a single run, kept in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str) -> Result<&Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClassroomError::InvalidName);
        }
        if self.find(name).is_some() {
            return Err(ClassroomError::DuplicateStudent(name.to_string()));
        }

        debug!("Adding student '{}'", name);
        let index = self.students.len();
        self.students.push(Student::new(name));
        Ok(&self.students[index])
    }

    pub fn find(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.matches(name))
    }

    pub fn append_grade(&mut self, name: &str, value: f64) -> Result<()> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.matches(name))
            .ok_or_else(|| ClassroomError::StudentNotFound(name.to_string()))?;

        // NaN fails the range check as well
        if !(MIN_GRADE..=MAX_GRADE).contains(&value) {
            debug!("Rejected grade {} for '{}'", value, student.name);
            return Err(ClassroomError::OutOfRange(value));
        }

        student.grades.push(value);
        debug!(
            "Recorded grade {} for '{}' ({} total)",
            value,
            student.name,
            student.grades.len()
        );
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
