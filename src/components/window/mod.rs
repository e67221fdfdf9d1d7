//! Draggable frame around an item's embedded content.
//!
//! Pressing the title bar starts a drag; the router owns the drag state and
//! publishes the resulting placement through `AppContext::window`. Move and
//! release are tracked on the whole window so a release outside the frame
//! still ends the drag.

use leptos::ev::{self, MouseEvent};
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Event, Point};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/window/window.module.css");

fn pointer(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
pub fn GameWindow(
    title: String,
    thumbnail_url: String,
    content_url: String,
    fullscreen_label: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let frame = NodeRef::<html::Div>::new();
    let content = NodeRef::<html::Iframe>::new();

    let on_press = move |ev: MouseEvent| {
        let Some(frame) = frame.get() else {
            return;
        };
        let rect = frame.get_bounding_client_rect();
        ev.prevent_default();
        ctx.send(Event::DragStart {
            pointer: pointer(&ev),
            origin: Point::new(rect.left(), rect.top()),
        });
    };

    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        if ctx.window.with_untracked(|p| p.dragging) {
            ctx.send(Event::DragMove(pointer(&ev)));
        }
    });
    let up_handle = window_event_listener(ev::mouseup, move |_| {
        if ctx.window.with_untracked(|p| p.dragging) {
            ctx.send(Event::DragEnd);
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
    });

    let on_fullscreen = move |ev: MouseEvent| {
        ev.stop_propagation();
        if let Some(content) = content.get()
            && let Err(err) = dom::request_fullscreen(&content)
        {
            tracing::error!(%err, "fullscreen unavailable");
        }
    };

    let class = move || {
        if ctx.window.with(|p| p.dragging) {
            format!("{} {}", css::frame, css::dragging)
        } else {
            css::frame.to_string()
        }
    };
    let style = move || {
        ctx.window.with(|p| match p.position {
            Some(at) => format!("position: fixed; left: {}px; top: {}px;", at.x, at.y),
            None => String::new(),
        })
    };

    view! {
        <div node_ref=frame class=class style=style>
            <div class=css::titleBar on:mousedown=on_press>
                <div class=css::titleGroup>
                    <img src=thumbnail_url alt=title.clone() class=css::avatar />
                    <h1 class=css::title>{title}</h1>
                </div>
                <button
                    class=css::titleButton
                    title=fullscreen_label
                    on:mousedown=|ev: MouseEvent| ev.stop_propagation()
                    on:click=on_fullscreen
                >
                    <Icon icon=ic::FULLSCREEN />
                </button>
            </div>
            <div class=css::viewport>
                <iframe
                    node_ref=content
                    src=content_url
                    class=css::content
                    allowfullscreen=true
                ></iframe>
            </div>
        </div>
    }
}
