use crate::constants::DONE_TOKEN;
use crate::roster::Roster;
use crate::statistics::{class_report, full_report, overall_statistics, top_performer};
use crate::types::{ClassroomError, Result};
use crate::utils::{format_average, format_number, is_sentinel, prompt};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufRead, Write};

const GRADE_PROMPT: &str = "Enter a grade (or 'done' to finish): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddGrades,
    Report,
    TopPerformer,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddStudent),
            "2" => Some(MenuChoice::AddGrades),
            "3" => Some(MenuChoice::Report),
            "4" => Some(MenuChoice::TopPerformer),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    InputClosed,
}

pub fn parse_grade(token: &str) -> Result<f64> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ClassroomError::NotANumber(token.trim().to_string()))
}

/// Menu-driven grade tracker over arbitrary input and output streams.
pub struct Shell<R, W> {
    roster: Roster,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            roster: Roster::new(),
            input,
            output,
            json: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_parts(self) -> (Roster, W) {
        (self.roster, self.output)
    }

    /// Loops over menu choices until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting grade analyzer session");

        loop {
            self.display_menu()?;
            let Some(choice) = prompt(&mut self.input, &mut self.output, "Enter your choice: ")? else {
                return self.interrupted();
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddStudent) => self.add_new_student()?,
                Some(MenuChoice::AddGrades) => self.add_grades_for_student()?,
                Some(MenuChoice::Report) => self.generate_report()?,
                Some(MenuChoice::TopPerformer) => self.find_top_performer()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program.")?;
                    info!("Session ended with {} students", self.roster.len());
                    return Ok(());
                }
                None => {
                    debug!("Unrecognized menu choice '{}'", choice);
                    self.print_error("Invalid choice. Please enter a number between 1 and 5.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::InputClosed {
                return self.interrupted();
            }
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "--- Student Grade Analyzer ---".bold())?;
        writeln!(self.output, "1. Add a new student")?;
        writeln!(self.output, "2. Add grades for a student")?;
        writeln!(self.output, "3. Generate a full report")?;
        writeln!(self.output, "4. Find top performer")?;
        writeln!(self.output, "5. Exit program")?;
        writeln!(self.output, "------------------------------")?;
        Ok(())
    }

    fn add_new_student(&mut self) -> Result<Flow> {
        let Some(name) = prompt(&mut self.input, &mut self.output, "Enter student name: ")? else {
            return Ok(Flow::InputClosed);
        };

        match self.roster.add(&name).map(|student| student.name.clone()) {
            Ok(added) => {
                let message = format!("Student '{}' added successfully.", added);
                writeln!(self.output, "{}", message.green())?;
            }
            Err(e @ (ClassroomError::DuplicateStudent(_) | ClassroomError::InvalidName)) => {
                self.print_error(&format!("Error: {}", e))?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn add_grades_for_student(&mut self) -> Result<Flow> {
        let Some(name) = prompt(&mut self.input, &mut self.output, "Enter student name: ")? else {
            return Ok(Flow::InputClosed);
        };
        let name = name.trim().to_string();

        let Some(display_name) = self.roster.find(&name).map(|s| s.name.clone()) else {
            self.print_error(&format!("Error: {}", ClassroomError::StudentNotFound(name)))?;
            return Ok(Flow::Continue);
        };

        writeln!(
            self.output,
            "Adding grades for {}. Enter a grade (or 'done' to finish):",
            display_name
        )?;

        loop {
            let Some(token) = prompt(&mut self.input, &mut self.output, GRADE_PROMPT)? else {
                return Ok(Flow::InputClosed);
            };
            if is_sentinel(&token, DONE_TOKEN) {
                break;
            }

            let outcome = parse_grade(&token).and_then(|grade| self.roster.append_grade(&display_name, grade));
            match outcome {
                Ok(()) => {}
                Err(e @ (ClassroomError::NotANumber(_) | ClassroomError::OutOfRange(_))) => {
                    self.print_error(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(Flow::Continue)
    }

    fn generate_report(&mut self) -> Result<Flow> {
        if self.roster.is_empty() {
            writeln!(self.output, "No students added yet. Please add students first.")?;
            return Ok(Flow::Continue);
        }

        if self.json {
            let report = full_report(&self.roster);
            writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "{}", "--- Student Report ---".bold())?;
        for line in class_report(&self.roster) {
            writeln!(
                self.output,
                "{}'s average grade is {}.",
                line.name,
                format_average(line.average)
            )?;
        }
        writeln!(self.output, "{}", "-".repeat(20))?;

        match overall_statistics(&self.roster) {
            Ok(stats) => {
                writeln!(self.output, "Max Average: {}", format_number(stats.max_average))?;
                writeln!(self.output, "Min Average: {}", format_number(stats.min_average))?;
                writeln!(self.output, "Overall Average: {:.1}", stats.mean_of_averages)?;
            }
            Err(ClassroomError::NoData) => {
                writeln!(self.output, "No overall averages available (no students have grades).")?;
            }
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn find_top_performer(&mut self) -> Result<Flow> {
        if self.roster.is_empty() {
            writeln!(self.output, "No students added yet. Cannot find top performer.")?;
            return Ok(Flow::Continue);
        }

        match top_performer(&self.roster) {
            Ok(top) => {
                writeln!(
                    self.output,
                    "The student with the highest average is {} with a grade of {}.",
                    top.student.name,
                    format_number(top.average)
                )?;
            }
            Err(ClassroomError::NoData) => {
                writeln!(self.output, "No students have grades yet. Cannot find top performer.")?;
            }
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn interrupted(&mut self) -> Result<()> {
        writeln!(self.output, "\nExiting program due to interrupt.")?;
        info!("Input closed; session ended with {} students", self.roster.len());
        Ok(())
    }

    fn print_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message.red())?;
        Ok(())
    }
}
