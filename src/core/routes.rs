//! Declarative route table.
//!
//! An ordered list of `{matcher, target}` entries. Exact entries always sit
//! before parametric ones; within each class, entries are tried in order and
//! the first one producing an [`Outcome`] wins. Parametric extractors return
//! `None` for ids unknown to the catalog, which falls through to the next
//! entry and eventually to the not-found handler.

use std::fmt;
use std::rc::Rc;

use percent_encoding::percent_decode_str;

use crate::config::paths;
use crate::core::catalog::Catalog;
use crate::models::{StaticPage, View};

/// What a handler asks the router to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Present `View`
    Render(View),
    /// Navigate to another path as a new resolve cycle
    Redirect(String),
}

/// Exact-route or not-found handler.
pub type Handler = Rc<dyn Fn() -> Outcome>;

/// Builds a view from the captured trailing segment.
pub type Extractor = fn(&Catalog, &str) -> Option<View>;

/// Path pattern classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matcher {
    /// Full path string match
    Exact(String),
    /// Fixed prefix followed by one captured trailing segment
    Prefix(&'static str),
}

impl Matcher {
    /// The captured segment (empty for exact matches), or `None`.
    pub fn capture<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Self::Exact(pattern) => (path == pattern).then_some(""),
            Self::Prefix(prefix) => path.strip_prefix(prefix),
        }
    }

    fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

#[derive(Clone)]
enum Target {
    Handler(Handler),
    Extract(Extractor),
}

#[derive(Clone)]
struct Entry {
    matcher: Matcher,
    target: Target,
}

/// Ordered route entries.
#[derive(Clone)]
pub struct RouteTable {
    entries: Vec<Entry>,
}

impl RouteTable {
    /// Table with only the parametric routes: item, tag, search.
    pub fn new() -> Self {
        let mut table = Self {
            entries: Vec::new(),
        };
        table.add_param_route(paths::ITEM_PREFIX, item_view);
        table.add_param_route(paths::TAG_PREFIX, tag_view);
        table.add_param_route(paths::SEARCH_PREFIX, search_view);
        table
    }

    /// Parametric routes plus the home page and the informational pages.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.add_route(paths::HOME, || Outcome::Render(View::Home));
        for page in [
            StaticPage::PrivacyPolicy,
            StaticPage::TermsOfService,
            StaticPage::Contact,
        ] {
            table.add_route(page.path(), move || Outcome::Render(View::Static(page)));
        }
        table
    }

    /// Register an exact-match handler; re-registering a pattern replaces it.
    pub fn add_route(&mut self, pattern: impl Into<String>, handler: impl Fn() -> Outcome + 'static) {
        let matcher = Matcher::Exact(pattern.into());
        let target = Target::Handler(Rc::new(handler));
        if let Some(entry) = self.entries.iter_mut().find(|e| e.matcher == matcher) {
            entry.target = target;
            return;
        }
        let at = self.entries.iter().take_while(|e| e.matcher.is_exact()).count();
        self.entries.insert(at, Entry { matcher, target });
    }

    /// Append a prefixed route after all existing entries.
    pub fn add_param_route(&mut self, prefix: &'static str, extract: Extractor) {
        self.entries.push(Entry {
            matcher: Matcher::Prefix(prefix),
            target: Target::Extract(extract),
        });
    }

    /// First outcome produced for `path`, or `None` when nothing matched.
    pub fn resolve(&self, path: &str, catalog: &Catalog) -> Option<Outcome> {
        self.entries.iter().find_map(|entry| {
            let segment = entry.matcher.capture(path)?;
            match &entry.target {
                Target::Handler(handler) => Some(handler()),
                Target::Extract(extract) => extract(catalog, segment).map(Outcome::Render),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| &e.matcher))
            .finish()
    }
}

/// Default not-found behavior: corrective redirect home.
pub fn redirect_home() -> Outcome {
    Outcome::Redirect(paths::HOME.to_string())
}

/// Decode a percent-encoded path segment; invalid UTF-8 decodes lossily.
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn item_view(catalog: &Catalog, id: &str) -> Option<View> {
    catalog.find_by_id(id).map(|item| View::Item(item.id.clone()))
}

fn tag_view(catalog: &Catalog, id: &str) -> Option<View> {
    catalog.find_tag(id).map(|tag| View::Tag(tag.id.clone()))
}

fn search_view(_: &Catalog, raw: &str) -> Option<View> {
    Some(View::Search(decode_segment(raw)))
}
