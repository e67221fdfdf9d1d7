//! Tag navigation panel.
//!
//! On wide viewports the panel is always shown; on narrow ones it is an
//! overlay toggled from the header menu button. Growing past the narrow
//! breakpoint closes the overlay.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::nav_click;
use crate::config::NARROW_VIEWPORT_QUERY;
use crate::core::Event;
use crate::core::render::SidebarEntry;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn SidebarRegion() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let narrow = use_media_query(NARROW_VIEWPORT_QUERY);
    Effect::new(move |_| {
        if !narrow.get() {
            ctx.send(Event::ClosePanel);
        }
    });

    move || {
        ctx.sidebar.get().map(|model| {
            view! {
                <nav class=css::panel>
                    <h3 class=css::heading>{model.heading}</h3>
                    <ul class=css::list>
                        {model
                            .entries
                            .into_iter()
                            .map(|entry| view! { <SidebarLink entry=entry /> })
                            .collect_view()}
                    </ul>
                </nav>
            }
        })
    }
}

#[component]
fn SidebarLink(entry: SidebarEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let class = if entry.highlighted {
        format!("{} {}", css::link, css::active)
    } else {
        css::link.to_string()
    };
    let on_click = nav_click(ctx, entry.path.clone());

    view! {
        <li>
            <a href=entry.path class=class data-tag=entry.tag_id on:click=on_click>
                <span class=css::icon><Icon icon=ic::TAG /></span>
                {entry.label}
            </a>
        </li>
    }
}
