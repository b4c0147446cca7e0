use std::fmt::{self, Display};
use std::io;

use logger::LoggerError;

/// Errors raised while loading the dataset, driving the map or starting the window.
#[derive(Debug)]
pub enum FoodMapError {
    /// Input/output error while reading a dataset file.
    Io(io::Error),
    /// Malformed CSV content.
    Csv(csv::Error),
    /// A dataset row with unusable values.
    InvalidPlace(String),
    /// The dataset has no rows.
    EmptyDataset,
    /// The map rejected a zoom level.
    InvalidZoom(f64),
    /// Error related to the logger.
    Logger(LoggerError),
    /// The native window could not be created.
    Window(eframe::Error),
}

impl Display for FoodMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodMapError::Io(e) => write!(f, "I/O Error: {}", e),
            FoodMapError::Csv(e) => write!(f, "CSV Error: {}", e),
            FoodMapError::InvalidPlace(msg) => write!(f, "Invalid place: {}", msg),
            FoodMapError::EmptyDataset => write!(f, "The dataset has no places"),
            FoodMapError::InvalidZoom(zoom) => write!(f, "Invalid zoom level: {}", zoom),
            FoodMapError::Logger(e) => write!(f, "Logger Error: {}", e),
            FoodMapError::Window(e) => write!(f, "Window Error: {}", e),
        }
    }
}

impl std::error::Error for FoodMapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FoodMapError::Io(e) => Some(e),
            FoodMapError::Csv(e) => Some(e),
            FoodMapError::Logger(e) => Some(e),
            FoodMapError::Window(e) => Some(e),
            FoodMapError::InvalidPlace(_)
            | FoodMapError::EmptyDataset
            | FoodMapError::InvalidZoom(_) => None,
        }
    }
}

impl From<io::Error> for FoodMapError {
    fn from(error: io::Error) -> Self {
        FoodMapError::Io(error)
    }
}

impl From<csv::Error> for FoodMapError {
    fn from(error: csv::Error) -> Self {
        FoodMapError::Csv(error)
    }
}

impl From<LoggerError> for FoodMapError {
    fn from(error: LoggerError) -> Self {
        FoodMapError::Logger(error)
    }
}

impl From<eframe::Error> for FoodMapError {
    fn from(error: eframe::Error) -> Self {
        FoodMapError::Window(error)
    }
}
