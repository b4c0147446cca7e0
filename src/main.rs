use std::env;
use std::path::{Path, PathBuf};

use food_map::config::MapConfig;
use food_map::places::{self, CsvFile, Fixture, PlaceSource};
use logger::{Color, Logger};

const USAGE: &str = "Usage: nyc-food-map [places.csv] [log_dir]";

/// Opens the NYC food map window.
///
/// # Usage
///
/// ```sh
/// cargo run -- [places.csv] [log_dir]
/// ```
///
/// Without a CSV file the eight built-in places are shown. The CSV file needs a
/// `name,lat,lon,meals` header and may add an `area` column. Logs are written
/// to `<log_dir>/food_map.log`, `log_dir` defaulting to the current directory.
///
/// # Errors
///
/// Returns an error if there are too many arguments, the log directory is not
/// usable, the CSV file cannot be loaded, or the window cannot be opened.
fn main() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 2 {
        return Err(USAGE.to_string());
    }

    let csv_path = args.first().map(PathBuf::from);
    let log_dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let logger = Logger::new(&log_dir, "food_map").map_err(|e| e.to_string())?;

    let mut source: Box<dyn PlaceSource> = match &csv_path {
        Some(path) => Box::new(CsvFile::new(path)),
        None => Box::new(Fixture),
    };

    let places = source.places().map_err(|e| {
        let message = format!("Could not load {}: {}", source.describe(), e);
        let _ = logger.error(&message, true);
        message
    })?;

    let _ = logger.info(
        &format!("Loaded {} places from {}", places.len(), source.describe()),
        Color::Green,
        true,
    );

    let config = MapConfig::default();
    for name in places::out_of_bounds(&places, &config.bounds) {
        let _ = logger.warn(&format!("{} lies outside the city bounds", name), true);
    }

    food_map::run(config, places, logger.clone()).map_err(|e| {
        let _ = logger.error(&format!("Window failed: {}", e), true);
        e.to_string()
    })?;

    log_exit(&log_dir, &logger);
    Ok(())
}

fn log_exit(log_dir: &Path, logger: &Logger) {
    let _ = logger.info(
        &format!("Exited, log kept in {}", log_dir.display()),
        Color::White,
        true,
    );
}
