use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use zcalc::logging::{self, LogTarget};
use zcalc::{App, Config, Display, KeyMap, TerminalDriver, replay};

/// Terminal calculator
#[derive(Parser, Debug)]
#[command(name = "zcalc")]
#[command(about = "A keyboard and mouse driven terminal calculator")]
#[command(version)]
struct Args {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay these keys headlessly and print the display instead of
    /// starting the UI (e.g. "12+30="). Backspace is \x7f or \x08,
    /// clear is \x18 (e.g. $'12\x7f+3=' in bash)
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the final state as JSON (with --keys)
    #[arg(long, requires = "keys")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;

    match args.keys {
        Some(keys) => {
            logging::init(&config.log, LogTarget::Stderr);
            run_headless(&config, &keys, args.json)
        }
        None => {
            logging::init(&config.log, LogTarget::File);
            run_tui(&config)
        }
    }
}

fn run_headless(config: &Config, keys: &str, json: bool) -> anyhow::Result<()> {
    let state = replay(keys, &KeyMap::new(&config.keys));
    let display = Display::of(&state, config.display.thousands_separator);

    if json {
        let output = serde_json::json!({ "state": state, "display": display });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", display.previous);
        println!("{}", display.current);
    }
    Ok(())
}

fn run_tui(config: &Config) -> anyhow::Result<()> {
    tracing::info!("starting zcalc");
    let mut app = App::new(config);
    let mut driver = TerminalDriver::new().context("Failed to set up terminal")?;
    driver.run(&mut app)?;
    Ok(())
}
