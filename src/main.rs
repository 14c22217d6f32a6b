use chrono::{Local, NaiveDate};
use clap::Parser;
use mindtrack::cli::{Cli, Shell};
use mindtrack::error::{MindtrackError, Result};
use mindtrack::infrastructure::Config;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 1. Load config (explicit path, local mindtrack.toml, or defaults)
    let config = Config::resolve(cli.config.as_deref())?;

    // 2. Fix the session date for the life of the shell
    let today = resolve_today(cli.today.as_deref())?;

    // 3. Run the prompt loop
    let mut shell = Shell::new(&config, today);
    shell.run()
}

/// The session date: --today wins, then MINDTRACK_TODAY, then the local date
fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    let override_value = match flag {
        Some(value) => Some(value.to_string()),
        None => std::env::var("MINDTRACK_TODAY").ok(),
    };

    match override_value {
        Some(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
            MindtrackError::Config(format!(
                "Invalid session date: '{}' (expected YYYY-MM-DD)",
                value
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}
