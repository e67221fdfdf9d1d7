//! Presentation modes and the per-region layout they imply.

/// Content-region presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Navigation panel, header and footer visible (default)
    #[default]
    Chrome,
    /// Chrome hidden, content fills the viewport (item detail only)
    Immersive,
}

impl ViewMode {
    /// Whether `region` is part of this mode's presentation.
    pub fn shows(self, region: Region) -> bool {
        match self {
            Self::Chrome => true,
            Self::Immersive => region == Region::Content,
        }
    }
}

/// Mobile navigation panel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Named regions of the host document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Sidebar,
    Header,
    Footer,
    Content,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Sidebar, Region::Header, Region::Footer, Region::Content];
}

/// Presentation of a single region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionState {
    Hidden,
    /// Normal flow. For the sidebar: shown on wide viewports only.
    Visible,
    /// Sidebar expanded over the content on narrow viewports.
    Overlay,
    /// Content region with chrome around it (partial width).
    Framed,
    /// Content region filling the viewport.
    Fullscreen,
}

impl RegionState {
    /// Class list applied to the region's element.
    pub fn class_name(self, region: Region) -> &'static str {
        match (region, self) {
            (Region::Content, Self::Fullscreen) => {
                "w-full h-screen bg-apple-gray-900 flex items-center justify-center p-4"
            }
            (Region::Content, _) => "flex-1",
            (Region::Sidebar, Self::Visible) => "hidden md:block",
            (Region::Sidebar, Self::Overlay) => "block mobile-sidebar",
            (_, Self::Hidden) => "hidden",
            _ => "",
        }
    }
}

/// One region whose presentation must change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionChange {
    pub region: Region,
    pub state: RegionState,
}

/// Full layout derived from view mode and panel state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub mode: ViewMode,
    pub panel: PanelState,
}

impl Layout {
    pub fn new(mode: ViewMode, panel: PanelState) -> Self {
        Self { mode, panel }
    }

    pub fn state_of(&self, region: Region) -> RegionState {
        if !self.mode.shows(region) {
            return RegionState::Hidden;
        }
        match region {
            Region::Content => match self.mode {
                ViewMode::Chrome => RegionState::Framed,
                ViewMode::Immersive => RegionState::Fullscreen,
            },
            Region::Sidebar => match self.panel {
                PanelState::Closed => RegionState::Visible,
                PanelState::Open => RegionState::Overlay,
            },
            Region::Header | Region::Footer => RegionState::Visible,
        }
    }

    /// Regions whose state differs from `previous` (all regions when `None`).
    pub fn diff(&self, previous: Option<&Layout>) -> Vec<RegionChange> {
        Region::ALL
            .into_iter()
            .filter(|&region| previous.is_none_or(|p| p.state_of(region) != self.state_of(region)))
            .map(|region| RegionChange {
                region,
                state: self.state_of(region),
            })
            .collect()
    }
}
