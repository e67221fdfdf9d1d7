//! UI components built with Leptos.
//!
//! - [`ContentRegion`] - draws the current page model into `#main-content`
//! - [`SidebarRegion`] - tag navigation panel in `#sidebar`
//! - [`window`] - draggable frame around embedded content
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod content;
pub mod icons;
pub mod sidebar;
pub mod window;

pub use content::ContentRegion;
pub use sidebar::SidebarRegion;

use leptos::ev::MouseEvent;

use crate::app::AppContext;

/// Click handler for an in-app link: no reload, navigate through the router.
pub(crate) fn nav_click(ctx: AppContext, path: String) -> impl Fn(MouseEvent) + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.navigate(path.clone());
    }
}
