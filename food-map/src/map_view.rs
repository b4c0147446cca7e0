use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use egui::{Color32, Frame, Stroke, Vec2};
use logger::{Color, Logger};
use walkers::{Map, MapMemory, Position, Tiles};

use crate::{
    config::MapConfig,
    errors::FoodMapError,
    plugins,
    state::{FullscreenState, InteractionState, MapEvent},
    types::{format_lat_lng, Popup, PopupKind, PointOfInterest, Summary, ViewConstraints, Viewport},
    widgets::{self, MapHeader, SummaryPanel},
};

/// Animated transition between two viewports.
#[derive(Debug, Clone, Copy)]
struct FlyTo {
    from: Viewport,
    to: Viewport,
    started: Instant,
    duration: Duration,
}

impl FlyTo {
    /// Viewport at `now` and whether the transition is over.
    fn at(&self, now: Instant) -> (Viewport, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from.lerp(&self.to, eased), false)
    }
}

/// The live map instance. Dropping it releases the tile layer and the map memory.
pub struct MapHandle {
    tiles: Option<Box<dyn Tiles>>,
    memory: MapMemory,
    home: Position,
    constraints: ViewConstraints,
    popups: Vec<Popup>,
    flight: Option<FlyTo>,
    resize_count: usize,
    /// On-screen size of the map, known once it has been drawn.
    view_size: Option<Vec2>,
}

impl MapHandle {
    fn new(tiles: Option<Box<dyn Tiles>>, config: &MapConfig) -> Result<Self, FoodMapError> {
        let mut handle = Self {
            tiles,
            memory: MapMemory::default(),
            home: config.initial_center,
            constraints: config.constraints(),
            popups: Vec::new(),
            flight: None,
            resize_count: 0,
            view_size: None,
        };
        handle.set_viewport(config.initial_viewport())?;
        Ok(handle)
    }

    pub fn viewport(&self) -> Viewport {
        let center = self.memory.detached().unwrap_or(self.home);
        Viewport::new(center, self.memory.zoom())
    }

    /// Moves the map, clamped to the zoom range and so that the visible area
    /// stays inside the bounds.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), FoodMapError> {
        let viewport = self.constraints.clamp_in_view(viewport, self.view_size);
        self.memory.center_at(viewport.center);
        self.memory
            .set_zoom(viewport.zoom)
            .map_err(|_| FoodMapError::InvalidZoom(viewport.zoom))
    }

    /// Pulls the map back inside its constraints after gestures moved it out.
    fn enforce_constraints(&mut self) -> Result<(), FoodMapError> {
        let current = self.viewport();
        if self.constraints.allows_in_view(&current, self.view_size) {
            return Ok(());
        }
        self.set_viewport(current)
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn is_open(&self, kind: PopupKind) -> bool {
        self.popups.iter().any(|popup| popup.kind == kind)
    }

    /// Opens `popup`, replacing the popup of the same family: marker popups
    /// replace each other, as do map click popups.
    fn open_popup(&mut self, popup: Popup) {
        let same_family = |other: &PopupKind| match (popup.kind, *other) {
            (PopupKind::Marker(_), PopupKind::Marker(_)) => true,
            (a, b) => a == b,
        };
        self.popups.retain(|open| !same_family(&open.kind));
        self.popups.push(popup);
    }

    fn close_popup(&mut self, kind: PopupKind) {
        self.popups.retain(|popup| popup.kind != kind);
    }

    fn fly_to(&mut self, target: Viewport, now: Instant, duration: Duration) {
        self.flight = Some(FlyTo {
            from: self.viewport(),
            to: self.constraints.clamp_in_view(target, self.view_size),
            started: now,
            duration,
        });
    }

    pub fn is_animating(&self) -> bool {
        self.flight.is_some()
    }

    /// Advances the running transition. Returns whether it is still running.
    fn step(&mut self, now: Instant) -> Result<bool, FoodMapError> {
        let Some(flight) = self.flight else {
            return Ok(false);
        };
        let (viewport, finished) = flight.at(now);
        self.set_viewport(viewport)?;
        if finished {
            self.flight = None;
        }
        Ok(!finished)
    }

    /// Called once the container finished changing size.
    fn invalidate_size(&mut self) -> Result<(), FoodMapError> {
        self.resize_count += 1;
        self.enforce_constraints()
    }

    pub fn resize_count(&self) -> usize {
        self.resize_count
    }

    /// Records the on-screen map size and pulls the view back inside the bounds.
    pub fn set_view_size(&mut self, size: Vec2) -> Result<(), FoodMapError> {
        self.view_size = Some(size);
        self.enforce_constraints()
    }
}

/// The map component: owns the map instance, the places and the fullscreen toggle.
pub struct MapView {
    config: MapConfig,
    places: Vec<PointOfInterest>,
    summary: Summary,
    handle: Option<MapHandle>,
    fullscreen: FullscreenState,
    pending_resizes: Vec<Instant>,
    interactions: Rc<RefCell<InteractionState>>,
    instances_created: usize,
    logger: Logger,
}

impl MapView {
    pub fn new(config: MapConfig, places: Vec<PointOfInterest>, logger: Logger) -> Self {
        let summary = Summary::from_places(&places);
        Self {
            config,
            places,
            summary,
            handle: None,
            fullscreen: FullscreenState::Normal,
            pending_resizes: Vec::new(),
            interactions: Rc::new(RefCell::new(InteractionState::new())),
            instances_created: 0,
            logger,
        }
    }

    /// Creates the map instance unless one is already alive.
    ///
    /// `tiles` is only invoked when a new instance is created. On success the
    /// first place's popup and the info popup are open.
    pub fn mount<F>(&mut self, tiles: F) -> Result<(), FoodMapError>
    where
        F: FnOnce() -> Option<Box<dyn Tiles>>,
    {
        if self.handle.is_some() {
            return Ok(());
        }

        let mut handle = MapHandle::new(tiles(), &self.config)?;

        if let Some(first) = self.places.first() {
            handle.open_popup(Popup::new(
                PopupKind::Marker(0),
                first.position,
                first.popup_text(),
            ));
        }
        handle.open_popup(Popup::new(
            PopupKind::Info,
            self.config.info_popup.position,
            self.config.info_popup.content.clone(),
        ));

        self.handle = Some(handle);
        self.instances_created += 1;
        let _ = self.logger.info(
            &format!("Map mounted with {} places", self.places.len()),
            Color::Green,
            true,
        );
        Ok(())
    }

    /// Releases the map instance. Safe to call when nothing is mounted.
    pub fn unmount(&mut self) {
        self.fullscreen = FullscreenState::Normal;
        self.pending_resizes.clear();
        self.interactions.borrow_mut().drain();
        if self.handle.take().is_some() {
            let _ = self.logger.info("Map unmounted", Color::Yellow, true);
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&MapHandle> {
        self.handle.as_ref()
    }

    /// Number of map instances created over the life of this view.
    pub fn instances_created(&self) -> usize {
        self.instances_created
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.handle.as_ref().map(MapHandle::viewport)
    }

    pub fn places(&self) -> &[PointOfInterest] {
        &self.places
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen()
    }

    /// Queue shared with the map plugins.
    pub fn interactions(&self) -> Rc<RefCell<InteractionState>> {
        self.interactions.clone()
    }

    /// Flips fullscreen mode and schedules the resize notification.
    pub fn toggle_fullscreen(&mut self, now: Instant) {
        self.fullscreen = self.fullscreen.toggled();
        self.pending_resizes.push(now + self.config.resize_delay);
        let _ = self.logger.info(
            &format!("Fullscreen {}", if self.is_fullscreen() { "on" } else { "off" }),
            Color::Cyan,
            false,
        );
    }

    /// Applies the events queued by the plugins during the last frame.
    pub fn process_events(&mut self, now: Instant) -> Result<(), FoodMapError> {
        let events = self.interactions.borrow_mut().drain();
        for event in events {
            self.apply(event, now)?;
        }
        Ok(())
    }

    pub fn apply(&mut self, event: MapEvent, now: Instant) -> Result<(), FoodMapError> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(());
        };

        match event {
            MapEvent::MarkerClicked(index) => {
                let Some(place) = self.places.get(index) else {
                    return Ok(());
                };
                let kind = PopupKind::Marker(index);
                if handle.is_open(kind) {
                    handle.close_popup(kind);
                } else {
                    handle.open_popup(Popup::new(kind, place.position, place.popup_text()));
                }
                handle.fly_to(
                    Viewport::new(place.position, self.config.marker_zoom),
                    now,
                    self.config.fly_duration,
                );
                let _ = self
                    .logger
                    .info(&format!("Marker clicked: {}", place.name), Color::Blue, false);
            }
            MapEvent::MapClicked(position) => {
                handle.open_popup(Popup::for_click(position));
                let _ = self.logger.info(
                    &format!("Map clicked at {}", format_lat_lng(position)),
                    Color::White,
                    false,
                );
            }
            MapEvent::PopupClosed(kind) => handle.close_popup(kind),
            MapEvent::Dragged => handle.flight = None,
        }
        Ok(())
    }

    /// Changes the zoom level by `delta`, within the allowed range.
    pub fn zoom_by(&mut self, delta: f64) -> Result<(), FoodMapError> {
        if let Some(handle) = self.handle.as_mut() {
            handle.flight = None;
            let mut viewport = handle.viewport();
            viewport.zoom += delta;
            handle.set_viewport(viewport)?;
        }
        Ok(())
    }

    /// Runs deferred work: due resize notifications, the fly-to transition and
    /// the viewport clamp. Returns how long until another frame is needed.
    pub fn tick(&mut self, now: Instant) -> Result<Option<Duration>, FoodMapError> {
        let (due, pending): (Vec<Instant>, Vec<Instant>) = self
            .pending_resizes
            .iter()
            .partition(|deadline| **deadline <= now);
        self.pending_resizes = pending;

        let mut next = self
            .pending_resizes
            .iter()
            .map(|deadline| deadline.saturating_duration_since(now))
            .min();

        let Some(handle) = self.handle.as_mut() else {
            return Ok(next);
        };

        for _ in due {
            handle.invalidate_size()?;
            let _ = self.logger.info("Map size invalidated", Color::Magenta, false);
        }

        if handle.step(now)? {
            next = Some(Duration::ZERO);
        } else {
            handle.enforce_constraints()?;
        }
        Ok(next)
    }

    /// Draws the header, the map and, outside fullscreen, the summary panel.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Result<(), FoodMapError> {
        let now = Instant::now();
        let was_fullscreen = self.is_fullscreen();

        if was_fullscreen {
            let size = ui.available_size();
            self.show_map(ui, size)?;
            if widgets::exit_fullscreen_button(ui.ctx()) {
                self.toggle_fullscreen(now);
            }
        } else {
            let title = format!(
                "NYC Food Distribution Network - {} Active Locations",
                self.places.len()
            );
            if ui.add(MapHeader::new(&title)).clicked() {
                self.toggle_fullscreen(now);
            }
            ui.add_space(10.0);

            let size = Vec2::new(ui.available_width(), self.config.map_height);
            Frame::none()
                .stroke(Stroke::new(2.0, Color32::from_gray(0x33)))
                .rounding(8.0)
                .show(ui, |ui| self.show_map(ui, size))
                .inner?;

            ui.add_space(20.0);
            ui.add(SummaryPanel::new(&self.places, &self.summary));
        }

        if was_fullscreen != self.is_fullscreen() {
            ui.ctx()
                .send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.is_fullscreen()));
        }

        self.process_events(now)
    }

    fn show_map(&mut self, ui: &mut egui::Ui, size: Vec2) -> Result<(), FoodMapError> {
        let Some(handle) = self.handle.as_mut() else {
            ui.allocate_space(size);
            return Ok(());
        };

        let places_plugin = plugins::Places::new(
            &self.places,
            &self.config.marker_style,
            self.interactions.clone(),
        );
        let popups_plugin = plugins::Popups::new(
            &handle.popups,
            &self.config.marker_style,
            self.interactions.clone(),
        );
        let clicks_plugin = plugins::Clicks::new(self.interactions.clone());

        let map = match handle.tiles.as_mut() {
            Some(tiles) => Map::new(Some(tiles.as_mut()), &mut handle.memory, handle.home),
            None => Map::new(None, &mut handle.memory, handle.home),
        }
        .with_plugin(places_plugin)
        .with_plugin(popups_plugin)
        .with_plugin(clicks_plugin);

        let response = ui.add_sized(size, map);
        handle.view_size = Some(response.rect.size());

        let _ = widgets::attribution(ui, response.rect, &self.config.tiles);
        if let Some(delta) = widgets::zoom_controls(ui, response.rect) {
            self.zoom_by(delta)?;
        }
        Ok(())
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.unmount();
    }
}
