use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::window::GameWindow;
use crate::core::Event;
use crate::core::render::{DescriptionBlock, DetailPage};

use super::css;

#[component]
pub fn DetailView(page: DetailPage) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::detail>
            <button class=css::backButton on:click=move |_| ctx.send(Event::Back)>
                <Icon icon=ic::BACK />
                <span>{page.back_label}</span>
            </button>

            <GameWindow
                title=page.title
                thumbnail_url=page.thumbnail_url
                content_url=page.content_url
                fullscreen_label=page.fullscreen_label
            />

            <div class=css::panel>
                <div class=css::chips>
                    {page
                        .chips
                        .into_iter()
                        .map(|chip| view! { <span class=css::chip>{chip}</span> })
                        .collect_view()}
                </div>
                <div class=css::prose>
                    {page.description.into_iter().map(block).collect_view()}
                </div>
                <div class=css::controls>
                    <h3>{format!("{}:", page.controls_heading)}</h3>
                    <p>{page.controls}</p>
                </div>
            </div>
        </div>
    }
}

fn block(block: DescriptionBlock) -> AnyView {
    match block {
        DescriptionBlock::Heading(text) => view! { <h3 class=css::blockHeading>{text}</h3> }.into_any(),
        DescriptionBlock::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        DescriptionBlock::List(items) => view! {
            <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
        }
        .into_any(),
    }
}
