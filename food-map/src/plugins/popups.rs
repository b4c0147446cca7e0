use std::{cell::RefCell, rc::Rc};

use egui::{Align2, Id, Order, Response, RichText, Vec2};
use walkers::{Plugin, Projector};

use crate::{
    config::MarkerStyle,
    state::{InteractionState, MapEvent},
    types::{Popup, PopupKind},
};

const POPUP_WIDTH: f32 = 220.0;
const TIP_GAP: f32 = 6.0;

/// Draws the open popups above their anchors.
pub struct Popups<'a> {
    popups: &'a [Popup],
    marker_style: &'a MarkerStyle,
    interactions: Rc<RefCell<InteractionState>>,
}

impl<'a> Popups<'a> {
    pub fn new(
        popups: &'a [Popup],
        marker_style: &'a MarkerStyle,
        interactions: Rc<RefCell<InteractionState>>,
    ) -> Self {
        Self {
            popups,
            marker_style,
            interactions,
        }
    }
}

impl Plugin for Popups<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        for popup in self.popups {
            let anchor = projector.project(popup.anchor).to_pos2();
            if !response.rect.contains(anchor) {
                continue;
            }

            // Marker popups sit on top of the pin, the others right above the point.
            let lift = match popup.kind {
                PopupKind::Marker(_) => self.marker_style.anchor.y + TIP_GAP,
                PopupKind::Info | PopupKind::Click => TIP_GAP,
            };

            if show_popup(ui.ctx(), popup, anchor - Vec2::new(0.0, lift)) {
                self.interactions
                    .borrow_mut()
                    .push(MapEvent::PopupClosed(popup.kind));
            }
        }
    }
}

/// Shows a single popup. Returns true when its close button was pressed.
fn show_popup(ctx: &egui::Context, popup: &Popup, bottom_center: egui::Pos2) -> bool {
    let mut closed = false;

    egui::Area::new(Id::new(("map_popup", popup.kind)))
        .order(Order::Foreground)
        .pivot(Align2::CENTER_BOTTOM)
        .fixed_pos(bottom_center)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(POPUP_WIDTH);
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        let mut lines = popup.content.lines();
                        if let PopupKind::Marker(_) = popup.kind {
                            if let Some(title) = lines.next() {
                                ui.label(RichText::new(title).strong());
                            }
                        }
                        for line in lines {
                            ui.label(line);
                        }
                    });
                    if ui.small_button("×").clicked() {
                        closed = true;
                    }
                });
            });
        });

    closed
}
