use crate::constants::STOP_TOKEN;
use crate::types::{ClassroomError, Result};
use crate::utils::{is_sentinel, prompt};
use colored::Colorize;
use log::debug;
use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeStage {
    Child,
    Teenager,
    Adult,
    Unknown,
}

impl LifeStage {
    pub fn from_age(age: i32) -> Self {
        match age {
            0..=12 => LifeStage::Child,
            13..=19 => LifeStage::Teenager,
            20.. => LifeStage::Adult,
            _ => LifeStage::Unknown,
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifeStage::Child => "Child",
            LifeStage::Teenager => "Teenager",
            LifeStage::Adult => "Adult",
            LifeStage::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    pub stage: LifeStage,
    pub hobbies: Vec<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>, birth_year: i32, reference_year: i32, hobbies: Vec<String>) -> Self {
        let age = age_from_birth_year(birth_year, reference_year);
        Self {
            name: name.into(),
            age,
            stage: LifeStage::from_age(age),
            hobbies,
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            "\n---".to_string(),
            "Profile Summary".to_string(),
            format!("Name: {}", self.name),
            format!("Age: {}", self.age),
            format!("Life Stage: {}", self.stage),
        ];

        if self.hobbies.is_empty() {
            lines.push("You didn't mention any hobbies.".to_string());
        } else {
            lines.push(format!("Favorite Hobbies ({}):", self.hobbies.len()));
            lines.extend(self.hobbies.iter().map(|hobby| format!("- {}", hobby)));
        }

        lines.push("---".to_string());
        lines.join("\n")
    }
}

pub fn age_from_birth_year(birth_year: i32, reference_year: i32) -> i32 {
    reference_year.saturating_sub(birth_year)
}

pub fn parse_birth_year(token: &str) -> Result<i32> {
    token
        .trim()
        .parse()
        .map_err(|_| ClassroomError::NotAYear(token.trim().to_string()))
}

/// Reads hobbies until a `stop` line or end of input. Blank entries are skipped.
pub fn collect_hobbies<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<String>> {
    let mut hobbies = Vec::new();

    loop {
        let Some(line) = prompt(input, output, "Enter hobby or type 'stop' to finish: ")? else {
            writeln!(output)?;
            break;
        };
        if is_sentinel(&line, STOP_TOKEN) {
            break;
        }

        let hobby = line.trim();
        if !hobby.is_empty() {
            debug!("Collected hobby '{}'", hobby);
            hobbies.push(hobby.to_string());
        }
    }

    Ok(hobbies)
}

/// Runs the whole questionnaire. Returns `None` if input ends before name and birth year are known.
pub fn build_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    reference_year: i32,
) -> Result<Option<Profile>> {
    let Some(name) = prompt(input, output, "Enter your full name: ")? else {
        return Ok(None);
    };

    let birth_year = loop {
        let Some(token) = prompt(input, output, "Enter your birth year: ")? else {
            return Ok(None);
        };
        match parse_birth_year(&token) {
            Ok(year) => break year,
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    };

    let hobbies = collect_hobbies(input, output)?;
    Ok(Some(Profile::new(name.trim(), birth_year, reference_year, hobbies)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_life_stage_boundaries() {
        assert_eq!(LifeStage::from_age(0), LifeStage::Child);
        assert_eq!(LifeStage::from_age(12), LifeStage::Child);
        assert_eq!(LifeStage::from_age(13), LifeStage::Teenager);
        assert_eq!(LifeStage::from_age(19), LifeStage::Teenager);
        assert_eq!(LifeStage::from_age(20), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(97), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(-1), LifeStage::Unknown);
    }

    #[test]
    fn test_parse_birth_year() {
        assert_eq!(parse_birth_year(" 1990 ").unwrap(), 1990);
        assert!(matches!(parse_birth_year("nineteen"), Err(ClassroomError::NotAYear(ref t)) if t == "nineteen"));
        assert!(parse_birth_year("1990.5").is_err());
    }

    #[test]
    fn test_collect_hobbies_until_stop() {
        let mut input = Cursor::new("chess\n\n  hiking  \nSTOP\npainting\n");
        let mut output = Vec::new();
        let hobbies = collect_hobbies(&mut input, &mut output).unwrap();
        assert_eq!(hobbies, vec!["chess", "hiking"]);
    }

    #[test]
    fn test_collect_hobbies_until_end_of_input() {
        let mut input = Cursor::new("reading\n");
        let mut output = Vec::new();
        let hobbies = collect_hobbies(&mut input, &mut output).unwrap();
        assert_eq!(hobbies, vec!["reading"]);
    }

    #[test]
    fn test_summary_with_hobbies() {
        let profile = Profile::new("Ada Lovelace", 2000, 2025, vec!["math".to_string(), "poetry".to_string()]);
        assert_eq!(profile.age, 25);
        assert_eq!(
            profile.summary(),
            "\n---\nProfile Summary\nName: Ada Lovelace\nAge: 25\nLife Stage: Adult\nFavorite Hobbies (2):\n- math\n- poetry\n---"
        );
    }

    #[test]
    fn test_summary_without_hobbies() {
        let profile = Profile::new("Kid", 2020, 2025, Vec::new());
        assert_eq!(profile.stage, LifeStage::Child);
        assert!(profile.summary().contains("You didn't mention any hobbies."));
    }

    #[test]
    fn test_build_profile_reprompts_on_bad_year() {
        colored::control::set_override(false);
        let mut input = Cursor::new("Sam\nabc\n2010\nskating\nstop\n");
        let mut output = Vec::new();
        let profile = build_profile(&mut input, &mut output, 2025).unwrap().unwrap();

        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.age, 15);
        assert_eq!(profile.stage, LifeStage::Teenager);
        assert_eq!(profile.hobbies, vec!["skating"]);

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Invalid birth year 'abc'"));
    }

    #[test]
    fn test_build_profile_future_birth_year_is_unknown() {
        let mut input = Cursor::new("Tess\n2030\nstop\n");
        let mut output = Vec::new();
        let profile = build_profile(&mut input, &mut output, 2025).unwrap().unwrap();
        assert_eq!(profile.age, -5);
        assert_eq!(profile.stage, LifeStage::Unknown);
    }

    #[test]
    fn test_build_profile_end_of_input() {
        let mut input = Cursor::new("Only a name\n");
        let mut output = Vec::new();
        assert!(build_profile(&mut input, &mut output, 2025).unwrap().is_none());
    }
}
