//! Content region: one component per page model.

mod card;
mod detail;
mod document;
mod home;
mod listing;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::render::Page;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Draws whatever page the router presented last.
#[component]
pub fn ContentRegion() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.page.get().map(|page| match page {
            Page::Home(page) => view! { <home::HomeView page=page /> }.into_any(),
            Page::Listing(page) => view! { <listing::ListingView page=page /> }.into_any(),
            Page::Search(page) => view! { <listing::SearchView page=page /> }.into_any(),
            Page::Detail(page) => view! { <detail::DetailView page=page /> }.into_any(),
            Page::Document(page) => view! { <document::DocumentView page=page /> }.into_any(),
            Page::Contact(page) => view! { <document::ContactView page=page /> }.into_any(),
        })
    }
}
