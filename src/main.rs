use std::io::{self, IsTerminal, Write};

use clap::Parser;
use tracing::{debug, error};

use numerist::{profile::Profile, report};

/// Compute a Pythagorean numerology profile
#[derive(Parser)]
#[command(name = "numerist")]
#[command(about = "numerist - Pythagorean numerology profiles from a name and birth date", long_about = None)]
#[command(version)]
struct Cli {
    /// Full name, as on the birth certificate (prompted for when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Birth date as MM-DD-YYYY or MM/DD/YYYY (prompted for when omitted)
    #[arg(short, long)]
    date: Option<String>,

    /// Emit the profile as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("numerist started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let name = match cli.name {
        Some(name) => name,
        None => prompt("Enter your full name (as on birth certificate): ")?,
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("name cannot be empty");
    }

    let date = match cli.date {
        Some(date) => date,
        None => prompt("Enter your birth date (MM-DD-YYYY or MM/DD/YYYY): ")?,
    };
    let date = date.trim();
    if date.is_empty() {
        anyhow::bail!("birth date cannot be empty");
    }

    let profile = Profile::compute(&name, date)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", report::render(&profile, io::stdout().is_terminal()));
    }
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}
