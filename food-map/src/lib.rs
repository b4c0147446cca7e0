use logger::Logger;

pub mod config;
pub mod errors;
pub mod map_view;
pub mod places;
mod plugins;
pub mod shell;
pub mod state;
pub mod tiles;
pub mod types;
mod widgets;

use config::MapConfig;
use errors::FoodMapError;
use shell::Shell;
use types::PointOfInterest;

pub const WINDOW_TITLE: &str = "NYC Food Map";

/// Opens the map window and blocks until it is closed.
pub fn run(
    config: MapConfig,
    places: Vec<PointOfInterest>,
    logger: Logger,
) -> Result<(), FoodMapError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let shell = Shell::new(cc, config, places, logger).map_err(|e| e.to_string())?;
            Ok(Box::new(shell))
        }),
    )?;
    Ok(())
}
