use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::nav_click;
use crate::core::render::{AboutBlock, CardSection, Hero, HomePage};

use super::card::CardGrid;
use super::css;

#[component]
pub fn HomeView(page: HomePage) -> impl IntoView {
    view! {
        <div>
            {page.hero.map(|hero| view! { <HeroBanner hero=hero /> })}
            <Section section=page.popular />
            <Section section=page.fresh />
            <About about=page.about />
        </div>
    }
}

#[component]
fn HeroBanner(hero: Hero) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let path = hero.path;

    view! {
        <section class=css::hero>
            <img src=hero.thumbnail_url alt=hero.title.clone() class=css::heroImage />
            <div class=css::heroShade></div>
            <div class=css::heroText>
                <span class=css::heroBadge>{hero.badge}</span>
                <h1 class=css::heroTitle>{hero.title}</h1>
                <p class=css::heroDescription>{hero.description}</p>
                <button class=css::heroButton on:click=move |_| ctx.navigate(path.clone())>
                    <Icon icon=ic::PLAY />
                    <span>{hero.play_label}</span>
                </button>
            </div>
        </section>
    }
}

#[component]
fn Section(section: CardSection) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let on_view_all = nav_click(ctx, section.view_all_path.clone());

    view! {
        <section class=css::section>
            <div class=css::sectionHeader>
                <h2 class=css::sectionTitle>{section.title}</h2>
                <a href=section.view_all_path class=css::viewAll on:click=on_view_all>
                    {section.view_all_label}
                    <Icon icon=ic::CHEVRON_RIGHT />
                </a>
            </div>
            <CardGrid cards=section.cards />
        </section>
    }
}

#[component]
fn About(about: AboutBlock) -> impl IntoView {
    view! {
        <section class=css::panel>
            <h2 class=css::sectionTitle>{about.title}</h2>
            <div class=css::prose>
                <p>{about.intro}</p>
                <p>{about.features_lead}</p>
                <ul>
                    {about
                        .features
                        .into_iter()
                        .map(|feature| view! { <li>{feature}</li> })
                        .collect_view()}
                </ul>
                <p>{about.closing}</p>
            </div>
        </section>
    }
}
