use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    errors::FoodMapError,
    types::{MapBounds, PointOfInterest},
};

/// A source of the places shown on the map.
///
/// The map view only ever sees the resulting `Vec`, so the compiled-in
/// fixture and a CSV file are interchangeable.
pub trait PlaceSource {
    fn places(&mut self) -> Result<Vec<PointOfInterest>, FoodMapError>;

    /// Short human readable description used in logs.
    fn describe(&self) -> String;
}

/// The eight built-in food places.
pub struct Fixture;

impl PlaceSource for Fixture {
    fn places(&mut self) -> Result<Vec<PointOfInterest>, FoodMapError> {
        Ok(default_places())
    }

    fn describe(&self) -> String {
        String::from("built-in dataset")
    }
}

/// Places read from a CSV file with a `name,lat,lon,meals[,area]` header.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl PlaceSource for CsvFile {
    fn places(&mut self) -> Result<Vec<PointOfInterest>, FoodMapError> {
        let file = File::open(&self.path)?;
        parse_places(file)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

pub fn default_places() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("Food Place 1", 40.7589, -73.9851, 342, "Times Square"),
        PointOfInterest::new("Food Place 2", 40.6892, -73.9442, 789, "Brooklyn/Queens Center"),
        PointOfInterest::new("Food Place 3", 40.8176, -73.9482, 156, "Bronx"),
        PointOfInterest::new("Food Place 4", 40.7505, -73.8370, 923, "Flushing, Queens"),
        PointOfInterest::new("Food Place 5", 40.6602, -73.9690, 234, "Prospect Park, Brooklyn"),
        PointOfInterest::new("Food Place 6", 40.5795, -74.1502, 567, "Staten Island"),
        PointOfInterest::new("Food Place 7", 40.7282, -73.7949, 678, "Jamaica, Queens"),
        PointOfInterest::new("Food Place 8", 40.6439, -74.0806, 445, "Bay Ridge, Brooklyn"),
    ]
}

#[derive(Debug, Deserialize)]
struct PlaceRecord {
    name: String,
    lat: f64,
    lon: f64,
    meals: u32,
    #[serde(default)]
    area: String,
}

impl TryFrom<PlaceRecord> for PointOfInterest {
    type Error = FoodMapError;

    fn try_from(record: PlaceRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(FoodMapError::InvalidPlace(String::from("empty name")));
        }
        if !(-90.0..=90.0).contains(&record.lat) {
            return Err(FoodMapError::InvalidPlace(format!(
                "{}: latitude {} out of range",
                record.name, record.lat
            )));
        }
        if !(-180.0..=180.0).contains(&record.lon) {
            return Err(FoodMapError::InvalidPlace(format!(
                "{}: longitude {} out of range",
                record.name, record.lon
            )));
        }

        Ok(PointOfInterest::new(
            record.name.trim(),
            record.lat,
            record.lon,
            record.meals,
            record.area.trim(),
        ))
    }
}

/// Reads places from CSV content.
pub fn parse_places<R: Read>(reader: R) -> Result<Vec<PointOfInterest>, FoodMapError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut places = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        // Trailing optional columns may be left out of a row.
        while record.len() < headers.len() {
            record.push_field("");
        }
        let record: PlaceRecord = record.deserialize(Some(&headers))?;
        places.push(PointOfInterest::try_from(record)?);
    }

    if places.is_empty() {
        return Err(FoodMapError::EmptyDataset);
    }
    Ok(places)
}

/// Names of the places lying outside `bounds`.
pub fn out_of_bounds<'a>(places: &'a [PointOfInterest], bounds: &MapBounds) -> Vec<&'a str> {
    places
        .iter()
        .filter(|place| !bounds.contains(&place.position))
        .map(|place| place.name.as_str())
        .collect()
}
