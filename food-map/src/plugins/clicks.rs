use std::{cell::RefCell, rc::Rc};

use egui::Response;
use walkers::{Plugin, Projector};

use crate::state::{InteractionState, MapEvent};

/// Reports clicks and drags on the map surface itself.
pub struct Clicks {
    interactions: Rc<RefCell<InteractionState>>,
}

impl Clicks {
    pub fn new(interactions: Rc<RefCell<InteractionState>>) -> Self {
        Self { interactions }
    }
}

impl Plugin for Clicks {
    fn run(self: Box<Self>, _ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        let mut interactions = self.interactions.borrow_mut();

        if response.dragged() {
            interactions.push(MapEvent::Dragged);
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                // Projector offsets are relative to the map's center.
                let position = projector.unproject(pointer - response.rect.center());
                interactions.push(MapEvent::MapClicked(position));
            }
        }
    }
}
