use leptos::prelude::*;

use crate::core::render::{ListingPage, SearchPage};

use super::card::CardGrid;
use super::css;

#[component]
pub fn ListingView(page: ListingPage) -> impl IntoView {
    view! {
        <div data-tag=page.tag_id>
            <h1 class=css::pageTitle>{page.title}</h1>
            <CardGrid cards=page.cards empty=page.empty_message />
        </div>
    }
}

#[component]
pub fn SearchView(page: SearchPage) -> impl IntoView {
    view! {
        <div>
            <h1 class=css::pageTitle>{page.title}</h1>
            <p class=css::summary>{page.summary}</p>
            <CardGrid cards=page.cards />
        </div>
    }
}
