use std::{cell::RefCell, rc::Rc};

use egui::{CursorIcon, Image, Response};
use walkers::{Plugin, Projector};

use crate::{
    config::MarkerStyle,
    state::{InteractionState, MapEvent},
    types::PointOfInterest,
};

/// Draws one clickable marker per place.
pub struct Places<'a> {
    places: &'a [PointOfInterest],
    style: &'a MarkerStyle,
    interactions: Rc<RefCell<InteractionState>>,
}

impl<'a> Places<'a> {
    pub fn new(
        places: &'a [PointOfInterest],
        style: &'a MarkerStyle,
        interactions: Rc<RefCell<InteractionState>>,
    ) -> Self {
        Self {
            places,
            style,
            interactions,
        }
    }
}

impl Plugin for Places<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        for (index, place) in self.places.iter().enumerate() {
            let clicked = place.draw(ui, response, projector, self.style);
            if clicked {
                self.interactions
                    .borrow_mut()
                    .push(MapEvent::MarkerClicked(index));
            }
        }
    }
}

impl PointOfInterest {
    /// Draws the marker and reports whether it was clicked.
    fn draw(
        &self,
        ui: &mut egui::Ui,
        map_response: &Response,
        projector: &Projector,
        style: &MarkerStyle,
    ) -> bool {
        let screen_position = projector.project(self.position).to_pos2();
        let rect = style.rect_at(screen_position);

        if !map_response.rect.intersects(rect) {
            return false;
        }

        let response = ui
            .allocate_rect(rect, egui::Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand)
            .on_hover_text(self.name.as_str());

        let image = if response.hovered() {
            Image::new(style.hovered_image.clone())
        } else {
            Image::new(style.image.clone())
        }
        .fit_to_exact_size(style.size);

        ui.put(rect, image);

        response.clicked()
    }
}
