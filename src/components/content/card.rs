use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::render::Card;

use super::css;

/// Summary card. Clicking anywhere opens the detail view; the play button
/// does the same without letting the click reach the card.
#[component]
pub fn GameCard(card: Card) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = card.path.clone();
    let open = move |_: MouseEvent| ctx.navigate(path.clone());
    let path = card.path;
    let play = move |ev: MouseEvent| {
        ev.stop_propagation();
        ctx.navigate(path.clone());
    };

    view! {
        <div class=css::card data-item=card.item_id on:click=open>
            <div class=css::thumb>
                <img src=card.thumbnail_url alt=card.title.clone() class=css::thumbImage />
                {card.badge.map(|badge| view! { <span class=css::badge>{badge}</span> })}
            </div>
            <div class=css::cardBody>
                <h3 class=css::cardTitle>{card.title}</h3>
                <p class=css::cardDescription>{card.description}</p>
                <div class=css::chips>
                    {card
                        .chips
                        .into_iter()
                        .map(|chip| view! { <span class=css::chip>{chip}</span> })
                        .collect_view()}
                </div>
                <button class=css::playButton on:click=play>
                    <Icon icon=ic::PLAY />
                    <span>{card.play_label}</span>
                </button>
            </div>
        </div>
    }
}

/// Responsive grid of cards, or `empty` when there are none.
#[component]
pub fn CardGrid(cards: Vec<Card>, #[prop(optional, into)] empty: Option<String>) -> impl IntoView {
    let is_empty = cards.is_empty();
    view! {
        <div class=css::grid>
            {cards
                .into_iter()
                .map(|card| view! { <GameCard card=card /> })
                .collect_view()}
            {empty
                .filter(|_| is_empty)
                .map(|message| view! { <div class=css::empty>{message}</div> })}
        </div>
    }
}
