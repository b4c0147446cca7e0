use std::time::Instant;

use egui::{Context, RichText};
use egui_extras::install_image_loaders;
use logger::{Color, Logger};

use crate::{
    config::MapConfig,
    errors::FoodMapError,
    map_view::MapView,
    tiles,
    types::PointOfInterest,
};

const TITLE: &str = "NYC Food Map";
const SUBTITLE: &str = "Food distribution points across the five boroughs";

/// Top-level frame: a header above the map view.
pub struct Shell {
    map_view: MapView,
    logger: Logger,
}

impl Shell {
    /// Builds the shell and mounts the map on the window's egui context.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: MapConfig,
        places: Vec<PointOfInterest>,
        logger: Logger,
    ) -> Result<Self, FoodMapError> {
        install_image_loaders(&cc.egui_ctx);

        let mut map_view = MapView::new(config, places, logger.clone());
        let egui_ctx = cc.egui_ctx.clone();
        let layer = map_view.config().tiles.clone();
        map_view.mount(|| Some(tiles::http_tiles(&layer, &egui_ctx)))?;

        Ok(Self { map_view, logger })
    }

    fn show_header(&self, ctx: &Context) {
        egui::TopBottomPanel::top("shell_header").show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(TITLE).size(28.0).strong());
                ui.label(RichText::new(SUBTITLE).size(16.0));
            });
            ui.add_space(20.0);
        });
    }
}

impl eframe::App for Shell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.map_view.is_fullscreen() {
            self.show_header(ctx);
        }

        let margin = if self.map_view.is_fullscreen() { 0.0 } else { 20.0 };
        let body = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            inner_margin: margin.into(),
            ..Default::default()
        };

        egui::CentralPanel::default().frame(body).show(ctx, |ui| {
            let result = if self.map_view.is_fullscreen() {
                self.map_view.ui(ui)
            } else {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| self.map_view.ui(ui))
                    .inner
            };
            if let Err(e) = result {
                let _ = self.logger.error(&format!("Map update failed: {}", e), true);
            }
        });

        match self.map_view.tick(Instant::now()) {
            Ok(Some(wait)) => ctx.request_repaint_after(wait),
            Ok(None) => {}
            Err(e) => {
                let _ = self.logger.error(&format!("Map tick failed: {}", e), true);
            }
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        let _ = self.logger.info("Window closed", Color::White, true);
    }
}
