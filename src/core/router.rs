//! Navigation controller.
//!
//! Owns the navigation state and turns [`Event`]s into calls on a [`Host`].
//! Every event is handled to completion before the next one is taken from
//! the mailbox; navigations requested while handling an event (redirects,
//! language observers, re-entrant UI callbacks) are queued behind it.

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::config::MAX_REDIRECTS;
use crate::core::catalog::Catalog;
use crate::core::dispatch::{Event, Mailbox, Pump};
use crate::core::drag::{DragController, Point, WindowPlacement};
use crate::core::history::History;
use crate::core::i18n::Localizer;
use crate::core::panel::MobilePanel;
use crate::core::render::{self, Page, SidebarModel};
use crate::core::routes::{self, Handler, Outcome, RouteTable};
use crate::models::{Language, Layout, RegionChange, View, ViewMode};

/// Rendering side of the router: the document regions.
pub trait Host {
    /// Replace the content region.
    fn render_content(&mut self, page: Page);
    /// Replace the navigation panel.
    fn render_sidebar(&mut self, sidebar: SidebarModel);
    /// Apply presentation changes to the listed regions only.
    fn apply_layout(&mut self, changes: &[RegionChange]);
    /// Re-translate static text outside the rendered regions.
    fn retranslate(&mut self, i18n: &Localizer);
    /// Move the content window in the detail view.
    fn place_window(&mut self, placement: WindowPlacement);
}

/// Current navigation state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub current_path: String,
    pub mode: ViewMode,
    pub panel: MobilePanel,
    /// Present only while an item detail view is shown
    pub drag: Option<DragController>,
    pub highlighted: BTreeSet<String>,
}

impl NavigationState {
    pub fn is_immersive(&self) -> bool {
        self.mode == ViewMode::Immersive
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.mode, self.panel.state())
    }

    /// Clear, then set, the highlighted tag set.
    fn highlight(&mut self, tags: Vec<String>) {
        self.highlighted.clear();
        self.highlighted.extend(tags);
    }
}

pub struct Router<Hi, Ho> {
    catalog: Rc<Catalog>,
    i18n: Localizer,
    routes: RouteTable,
    not_found: Handler,
    state: NavigationState,
    view: Option<View>,
    applied: Option<Layout>,
    redirects: usize,
    mailbox: Mailbox,
    history: Hi,
    host: Ho,
}

impl<Hi: History, Ho: Host> Router<Hi, Ho> {
    pub fn new(catalog: Rc<Catalog>, mut i18n: Localizer, history: Hi, host: Ho) -> Self {
        let mailbox = Mailbox::new();
        let inbox = mailbox.clone();
        i18n.subscribe(move |language| inbox.post(Event::LanguageChanged(language)));

        Self {
            catalog,
            i18n,
            routes: RouteTable::standard(),
            not_found: Rc::new(routes::redirect_home),
            state: NavigationState::default(),
            view: None,
            applied: None,
            redirects: 0,
            mailbox,
            history,
            host,
        }
    }

    /// Register an exact-path handler. Later registrations replace earlier ones.
    pub fn add_route(&mut self, pattern: impl Into<String>, handler: impl Fn() -> Outcome + 'static) {
        self.routes.add_route(pattern, handler);
    }

    pub fn set_not_found(&mut self, handler: impl Fn() -> Outcome + 'static) {
        self.not_found = Rc::new(handler);
    }

    pub fn mailbox(&self) -> Mailbox {
        self.mailbox.clone()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The view presented last.
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn localizer(&self) -> &Localizer {
        &self.i18n
    }

    pub fn history(&self) -> &Hi {
        &self.history
    }

    pub fn host(&self) -> &Ho {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Ho {
        &mut self.host
    }

    /// Translate static host text, then present the current entry.
    pub fn start(&mut self) {
        tracing::info!(language = %self.i18n.current_language(), "starting navigation");
        self.host.retranslate(&self.i18n);
        self.resolve();
    }

    /// Queue `event` and drain the mailbox.
    pub fn dispatch(&mut self, event: Event) {
        self.mailbox.post(event);
        self.pump();
    }

    pub fn navigate(&mut self, path: &str) {
        self.dispatch(Event::Navigate(path.to_string()));
    }

    /// Resolve the current history entry.
    pub fn resolve(&mut self) {
        self.dispatch(Event::Resolve);
    }

    pub fn switch_language(&mut self, language: Language) {
        self.dispatch(Event::SwitchLanguage(language));
    }

    fn handle(&mut self, event: Event) {
        tracing::trace!(?event, "handling");
        match event {
            Event::Navigate(path) => {
                self.redirects = 0;
                self.go(&path);
            }
            Event::Redirect(path) => {
                self.redirects += 1;
                if self.redirects > MAX_REDIRECTS {
                    tracing::error!(%path, limit = MAX_REDIRECTS, "redirect loop, resolution stopped");
                    self.redirects = 0;
                    return;
                }
                self.go(&path);
            }
            Event::Resolve | Event::HistoryPopped => self.resolve_current(),
            Event::Back => {
                self.state.mode = ViewMode::Chrome;
                self.state.drag = None;
                self.apply_layout();
                self.history.back();
            }
            Event::SwitchLanguage(language) => {
                self.i18n.switch_language(language);
            }
            Event::LanguageChanged(language) => {
                tracing::debug!(%language, "re-rendering for new language");
                self.host.retranslate(&self.i18n);
                self.render_sidebar();
                self.resolve_current();
            }
            Event::TogglePanel => {
                self.state.panel.toggle();
                self.apply_layout();
            }
            Event::ClosePanel => {
                if self.state.panel.close() {
                    self.apply_layout();
                }
            }
            Event::DragStart { pointer, origin } => self.drag_start(pointer, origin),
            Event::DragMove(pointer) => {
                if let Some(drag) = self.state.drag.as_mut()
                    && drag.move_to(pointer).is_some()
                {
                    let placement = drag.placement();
                    self.host.place_window(placement);
                }
            }
            Event::DragEnd => {
                if let Some(drag) = self.state.drag.as_mut()
                    && drag.release()
                {
                    let placement = drag.placement();
                    self.host.place_window(placement);
                }
            }
        }
    }

    fn go(&mut self, path: &str) {
        self.history.push(path);
        self.state.panel.close();
        self.resolve_current();
    }

    fn drag_start(&mut self, pointer: Point, origin: Point) {
        if let Some(drag) = self.state.drag.as_mut() {
            drag.press(pointer, origin);
            let placement = drag.placement();
            self.host.place_window(placement);
        }
    }

    fn resolve_current(&mut self) {
        let path = self.history.current_path();
        let outcome = match self.routes.resolve(&path, &self.catalog) {
            Some(outcome) => outcome,
            None => {
                tracing::debug!(%path, "no route matched");
                let not_found = self.not_found.clone();
                not_found()
            }
        };

        match outcome {
            Outcome::Render(view) => self.present(path, view),
            // A new resolve cycle, after the current one completes
            Outcome::Redirect(target) => self.mailbox.post(Event::Redirect(target)),
        }
    }

    fn present(&mut self, path: String, view: View) {
        let Some(page) = render::page(&view, &self.catalog, &self.i18n) else {
            tracing::warn!(%path, "view has nothing to render");
            return;
        };

        self.redirects = 0;
        self.state.current_path = path;
        self.state.mode = view.mode();
        self.state.drag = matches!(view, View::Item(_)).then(DragController::new);
        if let Some(tags) = render::highlight_for(&view, &self.catalog) {
            self.state.highlight(tags);
        }

        self.apply_layout();
        self.host.render_content(page);
        self.render_sidebar();
        if let Some(drag) = &self.state.drag {
            self.host.place_window(drag.placement());
        }
        self.view = Some(view);
    }

    fn render_sidebar(&mut self) {
        let model = render::sidebar(&self.catalog, &self.i18n, &self.state.highlighted);
        self.host.render_sidebar(model);
    }

    fn apply_layout(&mut self) {
        let layout = self.state.layout();
        let changes = layout.diff(self.applied.as_ref());
        if !changes.is_empty() {
            self.host.apply_layout(&changes);
        }
        self.applied = Some(layout);
    }
}

impl<Hi: History, Ho: Host> Pump for Router<Hi, Ho> {
    fn pump(&mut self) {
        while let Some(event) = self.mailbox.take() {
            self.handle(event);
        }
    }
}
