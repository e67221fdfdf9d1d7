//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuChevronRight as ChevronRight, LuGlobe as Website,
        LuMail as Email, LuMaximize as Fullscreen, LuPlay as Play, LuSend as Send,
        LuShare2 as Social, LuTag as Tag,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as Back, BsArrowsFullscreen as Fullscreen, BsChevronRight as ChevronRight,
        BsEnvelope as Email, BsGlobe as Website, BsPlayFill as Play, BsSend as Send,
        BsShare as Social, BsTag as Tag,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(EMAIL, Email);
themed_icon!(FULLSCREEN, Fullscreen);
themed_icon!(PLAY, Play);
themed_icon!(SEND, Send);
themed_icon!(SOCIAL, Social);
themed_icon!(TAG, Tag);
themed_icon!(WEBSITE, Website);
