use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::render::{ContactChannel, ContactForm, ContactPage, DocumentPage, DocumentSection};

use super::css;

#[component]
pub fn DocumentView(page: DocumentPage) -> impl IntoView {
    view! {
        <article class=css::panel>
            <h1 class=css::pageTitle>{page.title}</h1>
            <div class=css::prose>
                <p class=css::updated>{page.updated}</p>
                {page.sections.into_iter().map(section).collect_view()}
            </div>
        </article>
    }
}

fn section(section: DocumentSection) -> impl IntoView {
    let bullets = (!section.bullets.is_empty()).then(|| {
        view! {
            <ul>{section.bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}</ul>
        }
    });
    view! {
        <h2 class=css::blockHeading>{section.heading}</h2>
        {section.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
        {bullets}
    }
}

#[component]
pub fn ContactView(page: ContactPage) -> impl IntoView {
    view! {
        <article class=css::panel>
            <h1 class=css::pageTitle>{page.title}</h1>
            <p>{page.intro}</p>
            <div class=css::contactGrid>
                <div>
                    <h2 class=css::blockHeading>{page.info_heading}</h2>
                    {page.channels.into_iter().enumerate().map(|(i, c)| channel(i, c)).collect_view()}
                </div>
                <MessageForm form=page.form />
            </div>
        </article>
    }
}

fn channel(index: usize, channel: ContactChannel) -> impl IntoView {
    let icon = match index {
        0 => ic::EMAIL,
        1 => ic::WEBSITE,
        _ => ic::SOCIAL,
    };
    view! {
        <div class=css::channel>
            <h3 class=css::channelLabel>
                <Icon icon=icon />
                <span>{channel.label}</span>
            </h3>
            <p>
                {channel
                    .links
                    .into_iter()
                    .map(|link| view! { <a href=link.href class=css::channelLink>{link.label}</a> })
                    .collect_view()}
            </p>
        </div>
    }
}

/// Nothing is sent anywhere; submitting only swaps in the confirmation.
#[component]
fn MessageForm(form: ContactForm) -> impl IntoView {
    let (sent, set_sent) = signal(false);
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_sent.set(true);
    };

    let ContactForm {
        heading,
        name_label,
        email_label,
        subject_label,
        message_label,
        submit_label,
        sent_message,
    } = form;

    view! {
        <div>
            <h2 class=css::blockHeading>{heading}</h2>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form class=css::form on:submit=on_submit>
                            <label>{name_label.clone()}<input type="text" name="name" required=true /></label>
                            <label>{email_label.clone()}<input type="email" name="email" required=true /></label>
                            <label>{subject_label.clone()}<input type="text" name="subject" required=true /></label>
                            <label>{message_label.clone()}<textarea name="message" rows="5" required=true></textarea></label>
                            <button type="submit" class=css::playButton>
                                <Icon icon=ic::SEND />
                                <span>{submit_label.clone()}</span>
                            </button>
                        </form>
                    }
                }
            >
                <p class=css::confirmation>{sent_message.clone()}</p>
            </Show>
        </div>
    }
}
