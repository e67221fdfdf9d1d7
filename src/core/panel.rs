//! Mobile Panel Controller.

use crate::models::PanelState;

/// Visibility of the navigation panel on narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobilePanel {
    state: PanelState,
}

impl MobilePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    /// Flip the panel and return the new state.
    pub fn toggle(&mut self) -> PanelState {
        self.state = match self.state {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        self.state
    }

    /// Close the panel. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = PanelState::Closed;
        was_open
    }
}
