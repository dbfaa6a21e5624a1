use std::io::{self, Write};

// Public exports
pub use crate::types::{
    ClassReport,
    ClassroomError,
    OverallStatistics,
    ReportLine,
    Result,
    Student,
    TopPerformer,
};
pub use crate::roster::Roster;
pub use crate::statistics::{average, class_report, full_report, overall_statistics, top_performer};
pub use crate::shell::{parse_grade, MenuChoice, Shell};
pub use crate::profile::{age_from_birth_year, build_profile, collect_hobbies, parse_birth_year, LifeStage, Profile};
pub use crate::settings::Settings;

// Internal modules
mod types;
mod roster;
mod statistics;
mod shell;
mod profile;
mod settings;
mod utils;
pub mod constants;

/// Runs the grade analyzer against the process's stdin and stdout.
pub fn run_grade_analyzer(json: bool) -> Result<()> {
    let mut shell = Shell::new(io::stdin().lock(), io::stdout().lock()).with_json(json);
    shell.run()
}

/// Asks for a profile on stdin and prints its summary (or JSON) to stdout.
pub fn run_profile_builder(reference_year: i32, json: bool) -> Result<()> {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let Some(profile) = build_profile(&mut input, &mut output, reference_year)? else {
        writeln!(output, "\nNo profile created: input ended early.")?;
        return Ok(());
    };

    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&profile)?)?;
    } else {
        writeln!(output, "{}", profile.summary())?;
    }
    output.flush()?;
    Ok(())
}
