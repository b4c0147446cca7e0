use std::fs;
use std::time::{Duration, Instant};

use food_map::config::MapConfig;
use food_map::map_view::MapView;
use food_map::places::{default_places, CsvFile, PlaceSource};
use food_map::state::MapEvent;
use food_map::types::{PopupKind, Viewport};
use logger::Logger;
use walkers::Position;

fn mounted_view() -> MapView {
    let mut view = MapView::new(MapConfig::default(), default_places(), Logger::sink());
    view.mount(|| None).expect("Failed to mount map");
    view
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn every_marker_popup_shows_name_meals_and_location() {
    let mut view = mounted_view();
    let now = Instant::now();

    for index in 0..view.places().len() {
        // The first popup is already open after mount; a click would close it.
        if !view.handle().unwrap().is_open(PopupKind::Marker(index)) {
            view.apply(MapEvent::MarkerClicked(index), now).unwrap();
        }
        let place = view.places()[index].clone();

        let handle = view.handle().unwrap();
        let popup = handle
            .popups()
            .iter()
            .find(|p| p.kind == PopupKind::Marker(index))
            .unwrap_or_else(|| panic!("popup of {} not open", place.name));

        assert!(popup.content.contains(&place.name));
        assert!(popup.content.contains(&place.meals.to_string()));
        assert!(popup.content.contains(&format!(
            "{:.4}, {:.4}",
            place.position.lat(),
            place.position.lon()
        )));
    }
}

#[test]
fn clicking_any_marker_centers_on_it_at_zoom_15() {
    let mut view = mounted_view();
    let mut now = Instant::now();

    for index in 0..view.places().len() {
        view.apply(MapEvent::MarkerClicked(index), now).unwrap();
        now += Duration::from_secs(1);
        view.tick(now).unwrap();

        let place = &view.places()[index];
        let viewport = view.viewport().unwrap();
        assert!(close(viewport.center.lat(), place.position.lat()));
        assert!(close(viewport.center.lon(), place.position.lon()));
        assert!(close(viewport.zoom, 15.0));
    }
}

#[test]
fn map_click_opens_popup_with_coordinate() {
    let mut view = mounted_view();
    let clicked = Position::from_lat_lon(40.6501, -73.9496);

    view.interactions()
        .borrow_mut()
        .push(MapEvent::MapClicked(clicked));
    view.process_events(Instant::now()).unwrap();

    let handle = view.handle().unwrap();
    let popup = handle
        .popups()
        .iter()
        .find(|p| p.kind == PopupKind::Click)
        .expect("click popup missing");
    assert_eq!(popup.anchor, clicked);
    assert!(popup.content.contains("LatLng(40.6501, -73.9496)"));
    assert!(handle.is_open(PopupKind::Marker(0)));
    assert!(handle.is_open(PopupKind::Info));
}

#[test]
fn fullscreen_round_trip_then_unmount() {
    let mut view = mounted_view();
    let start = Instant::now();
    let before = view.is_fullscreen();

    view.toggle_fullscreen(start);
    view.tick(start + Duration::from_millis(150)).unwrap();
    view.toggle_fullscreen(start + Duration::from_millis(200));
    view.tick(start + Duration::from_millis(350)).unwrap();

    assert_eq!(view.is_fullscreen(), before);
    assert_eq!(view.instances_created(), 1);
    assert!(view.is_mounted());

    view.unmount();
    assert!(!view.is_mounted());
    assert!(view.handle().is_none());
}

#[test]
fn summary_matches_default_dataset() {
    let view = mounted_view();
    let summary = view.summary();

    assert_eq!(summary.total_locations, 8);
    assert_eq!(summary.total_meals, 4134);
    assert_eq!(summary.meal_range, Some((156, 923)));
}

#[test]
fn view_never_leaves_city_bounds() {
    let mut view = mounted_view();
    let constraints = view.config().constraints();

    view.zoom_by(-5.0).unwrap();
    let viewport = view.viewport().unwrap();
    assert!(close(viewport.zoom, 10.0));
    assert!(constraints.allows(&viewport));

    view.zoom_by(12.0).unwrap();
    assert!(close(view.viewport().unwrap().zoom, 18.0));

    let far_away = Viewport::new(Position::from_lat_lon(34.05, -118.24), 12.0);
    assert!(constraints.allows(&constraints.clamp(far_away)));
}

#[test]
fn csv_dataset_drives_the_view() {
    let dir = std::env::temp_dir().join("food_map_csv_dataset");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("places.csv");
    fs::write(
        &path,
        "name,lat,lon,meals,area\n\
         Mott Haven Pantry,40.8090,-73.9229,410,Bronx\n\
         Red Hook Kitchen,40.6757,-74.0090,95,Brooklyn\n",
    )
    .unwrap();

    let places = CsvFile::new(&path).places().unwrap();
    let mut view = MapView::new(MapConfig::default(), places, Logger::sink());
    view.mount(|| None).unwrap();

    assert_eq!(view.summary().total_locations, 2);
    assert_eq!(view.summary().total_meals, 505);
    let first = &view.handle().unwrap().popups()[0];
    assert!(first.content.starts_with("Mott Haven Pantry"));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn bundled_csv_matches_built_in_places() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/nyc_places.csv");
    let places = CsvFile::new(&path).places().unwrap();

    assert_eq!(places, default_places());
}
