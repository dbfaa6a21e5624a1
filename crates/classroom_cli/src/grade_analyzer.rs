use clap::Parser as ClapParser;
use dotenv::dotenv;
use log::{debug, error};
use std::process::ExitCode;

use classroom::{run_grade_analyzer, Settings};

/// Menu-driven student grade tracker.
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the full report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load();
    debug!("Loaded settings: {:?}", settings);
    if args.no_color || !settings.color_enabled() {
        colored::control::set_override(false);
    }

    match run_grade_analyzer(args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Grade analyzer failed: {}", e);
            eprintln!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
