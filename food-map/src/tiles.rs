use egui::Context;
use walkers::{
    sources::{Attribution, TileSource},
    HttpOptions, HttpTiles, TileId, Tiles,
};

use crate::config::TileLayerConfig;

/// Raster tile source addressed by a `{z}/{x}/{y}` URL template.
#[derive(Debug, Clone)]
pub struct OsmTiles {
    layer: TileLayerConfig,
}

impl OsmTiles {
    pub fn new(layer: TileLayerConfig) -> Self {
        Self { layer }
    }
}

impl TileSource for OsmTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        expand_template(self.layer.url_template, tile_id.zoom, tile_id.x, tile_id.y)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.layer.attribution,
            url: self.layer.attribution_url,
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Downloading tile layer for a live map.
pub fn http_tiles(layer: &TileLayerConfig, egui_ctx: &Context) -> Box<dyn Tiles> {
    Box::new(HttpTiles::with_options(
        OsmTiles::new(layer.clone()),
        HttpOptions::default(),
        egui_ctx.to_owned(),
    ))
}

fn expand_template(template: &str, zoom: u8, x: u32, y: u32) -> String {
    template
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}
