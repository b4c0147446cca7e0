use egui::{Align2, Button, Color32, Pos2, Rect, RichText, Vec2};

use crate::config::TileLayerConfig;

const EXIT_FILL: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
const ZOOM_BUTTON: Vec2 = Vec2::new(30.0, 30.0);

/// Overlay button leaving fullscreen, pinned to the top-right corner.
pub fn exit_fullscreen_button(ctx: &egui::Context) -> bool {
    egui::Area::new("exit_fullscreen_button".into())
        .order(egui::Order::Foreground)
        .anchor(Align2::RIGHT_TOP, [-20.0, 20.0])
        .show(ctx, |ui| {
            ui.add_sized(
                [150.0, 40.0],
                Button::new(RichText::new("✕ Exit Fullscreen").strong().color(Color32::WHITE))
                    .fill(EXIT_FILL)
                    .rounding(5.0),
            )
            .clicked()
        })
        .inner
}

/// "+" and "-" buttons in the top-left corner of the map.
/// Returns the requested zoom change.
pub fn zoom_controls(ui: &mut egui::Ui, map_rect: Rect) -> Option<f64> {
    let origin = map_rect.left_top() + Vec2::new(10.0, 10.0);
    let zoom_in = Rect::from_min_size(origin, ZOOM_BUTTON);
    let zoom_out = Rect::from_min_size(origin + Vec2::new(0.0, ZOOM_BUTTON.y + 2.0), ZOOM_BUTTON);

    if ui.put(zoom_in, Button::new(RichText::new("+").heading())).clicked() {
        return Some(1.0);
    }
    if ui.put(zoom_out, Button::new(RichText::new("-").heading())).clicked() {
        return Some(-1.0);
    }
    None
}

/// Tile provider credit in the bottom-left corner of the map.
pub fn attribution(ui: &mut egui::Ui, map_rect: Rect, tiles: &TileLayerConfig) -> egui::Response {
    let height = 18.0;
    let rect = Rect::from_min_max(
        Pos2::new(map_rect.left() + 4.0, map_rect.bottom() - height - 2.0),
        Pos2::new(map_rect.right(), map_rect.bottom() - 2.0),
    );

    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |ui| {
        egui::Frame::none()
            .fill(Color32::from_white_alpha(200))
            .inner_margin(egui::Margin::symmetric(4.0, 1.0))
            .show(ui, |ui| {
                ui.hyperlink_to(
                    RichText::new(tiles.attribution).small().color(Color32::DARK_GRAY),
                    tiles.attribution_url,
                );
            });
    })
    .response
}
