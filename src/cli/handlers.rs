use anyhow::{Context, Result};
use std::io;

use crate::cli::session::{write_topics, Session};
use crate::config::AppConfig;
use crate::tracker::DailyTracker;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const EMERALD: &str = "\x1b[38;2;52;168;124m";

// ─── Session ─────────────────────────────────────────────────────────────────

pub fn handle_session(config: &AppConfig, quiet: bool) -> Result<()> {
    let tracker = DailyTracker::new(config.initial_state());
    let mut session = Session::new(tracker, config.steps.clone(), quiet);

    if !quiet {
        println_colored!(EMERALD, "  Today's practice: type `help` for commands, Ctrl-D to finish");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)
}

// ─── Topics ──────────────────────────────────────────────────────────────────

pub fn handle_topics() -> Result<()> {
    println!();
    println_colored!(EMERALD, "  Study Topics");
    println!();
    write_topics(&mut io::stdout())?;
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, reset: bool) -> Result<()> {
    let path = AppConfig::config_path()?;

    let effective = if reset || !path.exists() {
        let defaults = AppConfig::default();
        defaults.save_to(&path)?;
        println_colored!(GREEN, "  ✓ Wrote default config to {}", path.display());
        defaults
    } else {
        println_colored!(DIM, "  Config: {}", path.display());
        config.clone()
    };

    println!();
    let content = toml::to_string_pretty(&effective).context("Serializing config")?;
    for line in content.lines() {
        println!("  {}", line);
    }
    println!();
    Ok(())
}
