// Timetable Grid
// Command-line entry point: lays out a JSON item list and prints the result

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use timetable_grid::models::interval::Interval;
use timetable_grid::services::schedule::ScheduleService;
use timetable_grid::services::settings::SettingsService;

const USAGE: &str = "usage: timetable-grid <items.json> [--config <grid.toml>]";

struct Args {
    items: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut items = None;
    let mut config = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            _ if items.is_none() => items = Some(PathBuf::from(&arg)),
            other => bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }

    let items = items.context(USAGE)?;
    Ok(Args { items, config })
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = parse_args()?;

    let settings_service = match args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location(),
    };
    log::info!("Using settings file {}", settings_service.path().display());
    let settings = settings_service.load()?;

    let data = fs::read_to_string(&args.items)
        .with_context(|| format!("failed to read items from {}", args.items.display()))?;
    let items: Vec<Interval> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse items from {}", args.items.display()))?;

    let schedule = ScheduleService::from_settings(&settings)?;
    let days = schedule.layout_days(&items)?;

    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}
