use egui::{Color32, RichText, Widget};

use crate::types::{PointOfInterest, Summary};

/// Panel under the map listing every place and the aggregate statistics.
pub struct SummaryPanel<'a> {
    places: &'a [PointOfInterest],
    summary: &'a Summary,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(places: &'a [PointOfInterest], summary: &'a Summary) -> Self {
        Self { places, summary }
    }

    /// Statistic lines, in display order.
    pub fn stat_lines(&self) -> Vec<String> {
        vec![
            format!("Total Food Places: {} locations", self.summary.total_locations),
            format!("Total Meals Available: {}", self.summary.total_meals_text()),
            String::from("Coverage: All 5 NYC boroughs"),
            format!("Range: {}", self.summary.range_text()),
            String::from("🔒 Map locked to NYC boundaries"),
            String::from("📈 Fullscreen mode available"),
        ]
    }
}

impl Widget for SummaryPanel<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        egui::Frame::none()
            .fill(Color32::from_gray(0xf5))
            .rounding(8.0)
            .inner_margin(15.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.visuals_mut().override_text_color = Some(Color32::from_gray(0x20));

                ui.label(
                    RichText::new("NYC Food Distribution Network:")
                        .size(18.0)
                        .strong(),
                );
                for place in self.places {
                    ui.label(format!("🍽 {}", place.summary_line()));
                }

                ui.add_space(10.0);
                ui.label(RichText::new("Distribution Stats:").strong());
                for line in self.stat_lines() {
                    ui.label(format!("• {}", line));
                }
            })
            .response
    }
}
