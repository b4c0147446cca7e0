use walkers::Position;

use crate::types::PopupKind;

/// Something the user did on the map during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The marker of the place at this dataset index was clicked.
    MarkerClicked(usize),
    /// The map itself was clicked at this coordinate.
    MapClicked(Position),
    /// The close button of a popup was pressed.
    PopupClosed(PopupKind),
    /// The map was dragged.
    Dragged,
}

/// Collects the events raised by the map plugins while a frame is drawn.
///
/// Plugins hold it behind an `Rc<RefCell<_>>` and the map view drains it once
/// the map has been added to the ui.
#[derive(Debug, Default)]
pub struct InteractionState {
    events: Vec<MapEvent>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: MapEvent) {
        self.events.push(event);
    }

    /// Takes the events of the frame. A map click reported in the same frame
    /// as a marker click belongs to the marker and is dropped.
    pub fn drain(&mut self) -> Vec<MapEvent> {
        let events = std::mem::take(&mut self.events);
        let marker_hit = events
            .iter()
            .any(|event| matches!(event, MapEvent::MarkerClicked(_)));

        if marker_hit {
            events
                .into_iter()
                .filter(|event| !matches!(event, MapEvent::MapClicked(_)))
                .collect()
        } else {
            events
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Whether the map fills the whole window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenState {
    #[default]
    Normal,
    Fullscreen,
}

impl FullscreenState {
    pub fn toggled(self) -> Self {
        match self {
            FullscreenState::Normal => FullscreenState::Fullscreen,
            FullscreenState::Fullscreen => FullscreenState::Normal,
        }
    }

    pub fn is_fullscreen(self) -> bool {
        self == FullscreenState::Fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut state = InteractionState::new();
        state.push(MapEvent::Dragged);
        state.push(MapEvent::PopupClosed(PopupKind::Info));

        assert_eq!(
            state.drain(),
            vec![MapEvent::Dragged, MapEvent::PopupClosed(PopupKind::Info)]
        );
        assert!(state.is_empty());
    }

    #[test]
    fn test_marker_click_shadows_map_click() {
        let mut state = InteractionState::new();
        state.push(MapEvent::MapClicked(Position::from_lat_lon(40.7, -73.9)));
        state.push(MapEvent::MarkerClicked(3));

        assert_eq!(state.drain(), vec![MapEvent::MarkerClicked(3)]);
    }

    #[test]
    fn test_fullscreen_toggle_round_trip() {
        let state = FullscreenState::default();
        assert!(!state.is_fullscreen());
        assert!(state.toggled().is_fullscreen());
        assert_eq!(state.toggled().toggled(), state);
    }
}
