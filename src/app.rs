//! Root application module.
//!
//! Wires the core [`Router`] to the host document. The document owns the
//! static chrome (header, footer, search form, language menu); Leptos is
//! mounted into the sidebar and content regions and draws whatever page
//! model the router last produced.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{ContentRegion, SidebarRegion};
use crate::config::{APP_NAME, dom_ids};
use crate::core::render::{Page, SidebarModel};
use crate::core::{
    Catalog, Dispatcher, Event, Host, Localizer, Router, Translations, WindowPlacement,
};
use crate::models::{Region, RegionChange};
use crate::utils::dom;
use crate::utils::{BrowserHistory, LocalStoragePrefs};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Signals hold the router's latest output; components read them and post
/// user input back through the dispatcher.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page model for the content region.
    pub page: RwSignal<Option<Page>>,
    /// Navigation panel model.
    pub sidebar: RwSignal<Option<SidebarModel>>,
    /// Content window placement in the detail view.
    pub window: RwSignal<WindowPlacement>,
    dispatcher: StoredValue<Dispatcher, LocalStorage>,
}

impl AppContext {
    pub fn send(&self, event: Event) {
        // Clone out of the store so the send runs without holding it
        let dispatcher = self.dispatcher.get_value();
        dispatcher.send(event);
    }

    pub fn navigate(&self, path: impl Into<String>) {
        self.send(Event::Navigate(path.into()));
    }
}

// ============================================================================
// DomHost
// ============================================================================

/// [`Host`] backed by the live document and the context signals.
pub struct DomHost {
    page: RwSignal<Option<Page>>,
    sidebar: RwSignal<Option<SidebarModel>>,
    window: RwSignal<WindowPlacement>,
}

fn region_id(region: Region) -> &'static str {
    match region {
        Region::Sidebar => dom_ids::SIDEBAR,
        Region::Header => dom_ids::HEADER,
        Region::Footer => dom_ids::FOOTER,
        Region::Content => dom_ids::CONTENT,
    }
}

impl Host for DomHost {
    fn render_content(&mut self, page: Page) {
        self.page.set(Some(page));
    }

    fn render_sidebar(&mut self, sidebar: SidebarModel) {
        self.sidebar.set(Some(sidebar));
    }

    fn apply_layout(&mut self, changes: &[RegionChange]) {
        for change in changes {
            let id = region_id(change.region);
            if let Err(err) = dom::set_class(id, change.state.class_name(change.region)) {
                tracing::debug!(%err, region = id, "region not present");
            }
        }
    }

    fn retranslate(&mut self, i18n: &Localizer) {
        let language = i18n.current_language();
        match dom::apply_translations(i18n) {
            Ok(count) => tracing::debug!(count, %language, "static text translated"),
            Err(err) => tracing::warn!(%err, "static text not translated"),
        }
        if let Err(err) = dom::set_text(dom_ids::CURRENT_LANGUAGE, language.native_name()) {
            tracing::debug!(%err, "no current-language label");
        }
        if let Err(err) = dom::set_document_lang(language.code()) {
            tracing::debug!(%err, "document language not set");
        }
    }

    fn place_window(&mut self, placement: WindowPlacement) {
        self.window.set(placement);
    }
}

// ============================================================================
// Boot
// ============================================================================

/// Build the router, mount the regions and present the current URL.
pub fn boot() {
    let page = RwSignal::new(None);
    let sidebar = RwSignal::new(None);
    let window = RwSignal::new(WindowPlacement::default());

    let i18n = Localizer::restore(Translations::bundled(), Box::new(LocalStoragePrefs));
    let host = DomHost {
        page,
        sidebar,
        window,
    };
    let router = Rc::new(RefCell::new(Router::new(
        Rc::new(Catalog::bundled()),
        i18n,
        BrowserHistory,
        host,
    )));
    let mailbox = router.borrow().mailbox();
    let dispatcher = Dispatcher::new(mailbox, router.clone());

    let ctx = AppContext {
        page,
        sidebar,
        window,
        dispatcher: StoredValue::new_local(dispatcher),
    };

    mount_region(dom_ids::SIDEBAR, move || {
        provide_context(ctx);
        view! { <SidebarRegion /> }
    });
    mount_region(dom_ids::CONTENT, move || {
        provide_context(ctx);
        view! { <ContentRegion /> }
    });

    #[cfg(target_arch = "wasm32")]
    controls::wire(ctx);

    tracing::info!(app = APP_NAME, "portal ready");
    router.borrow_mut().start();
}

fn mount_region<F, N>(id: &str, region: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let target = dom::element_by_id(id).and_then(|element| {
        element
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| crate::core::error::DomError::MissingElement(id.to_string()))
    });
    match target {
        Ok(element) => mount_to(element, region).forget(),
        Err(err) => tracing::warn!(%err, region = id, "render target missing, region skipped"),
    }
}

// ============================================================================
// Static controls
// ============================================================================

/// Listeners for controls that live in the host document.
#[cfg(target_arch = "wasm32")]
mod controls {
    use super::AppContext;
    use crate::config::{LANG_ATTR, dom_ids};
    use crate::core::Event;
    use crate::models::{Language, search_path};
    use crate::utils::dom::{self, listen};
    use wasm_bindgen::JsCast;

    pub(super) fn wire(ctx: AppContext) {
        let Some(window) = dom::window() else {
            return;
        };

        // Back/forward buttons
        listen(&window, "popstate", move |_| ctx.send(Event::HistoryPopped));

        if let Ok(form) = dom::element_by_id(dom_ids::SEARCH_FORM) {
            listen(&form, "submit", move |ev| {
                ev.prevent_default();
                let query = dom::element_by_id(dom_ids::SEARCH_INPUT)
                    .ok()
                    .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                    .map(|input| input.value().trim().to_string())
                    .unwrap_or_default();
                if !query.is_empty() {
                    ctx.navigate(search_path(&query));
                }
            });
        }

        if let Ok(button) = dom::element_by_id(dom_ids::LANGUAGE_BUTTON) {
            listen(&button, "click", move |ev| {
                ev.stop_propagation();
                let _ = dom::toggle_hidden(dom_ids::LANGUAGE_DROPDOWN);
            });
        }

        // Outside click closes the language menu
        if let Ok(document) = dom::document() {
            listen(&document, "click", move |_| {
                let _ = dom::hide(dom_ids::LANGUAGE_DROPDOWN);
            });
        }

        for option in dom::query_all(&format!("[{}]", LANG_ATTR)).unwrap_or_default() {
            let code = option.get_attribute(LANG_ATTR).unwrap_or_default();
            let Some(language) = Language::from_code(&code) else {
                tracing::warn!(%code, "language option with unsupported code");
                continue;
            };
            listen(&option, "click", move |_| {
                let _ = dom::hide(dom_ids::LANGUAGE_DROPDOWN);
                ctx.send(Event::SwitchLanguage(language));
            });
        }

        if let Ok(menu) = dom::element_by_id(dom_ids::MENU_BUTTON) {
            listen(&menu, "click", move |_| ctx.send(Event::TogglePanel));
        }

        // In-document links navigate without a reload
        for link in dom::query_all("a[data-nav]").unwrap_or_default() {
            let Some(path) = link.get_attribute("href") else {
                continue;
            };
            listen(&link, "click", move |ev| {
                ev.prevent_default();
                ctx.navigate(path.clone());
            });
        }
    }
}
