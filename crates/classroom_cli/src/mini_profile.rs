use clap::Parser as ClapParser;
use dotenv::dotenv;
use log::{error, info};
use std::process::ExitCode;

use classroom::{run_profile_builder, Settings};

/// Builds a short personal profile with a life stage and hobby list.
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Year the age is computed against
    #[arg(long)]
    current_year: Option<i32>,

    /// Print the profile as JSON
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
    if args.no_color || !settings.color_enabled() {
        colored::control::set_override(false);
    }

    let reference_year = settings.reference_year(args.current_year);
    info!("Computing ages against {}", reference_year);

    match run_profile_builder(reference_year, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Profile builder failed: {}", e);
            eprintln!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
