use egui::{Button, Color32, RichText, Widget};

const BUTTON_FILL: Color32 = Color32::from_rgb(0x00, 0x7b, 0xff);

/// Section heading of the map with the button entering fullscreen.
///
/// The returned response is the button's, so `clicked()` means "go fullscreen".
pub struct MapHeader<'a> {
    title: &'a str,
}

impl<'a> MapHeader<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }
}

impl Widget for MapHeader<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            ui.heading(self.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                Button::new(RichText::new("📈 Fullscreen").strong().color(Color32::WHITE))
                    .fill(BUTTON_FILL)
                    .rounding(5.0)
                    .min_size(egui::vec2(120.0, 32.0))
                    .ui(ui)
            })
            .inner
        })
        .inner
    }
}
