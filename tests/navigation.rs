//! End-to-end navigation scenarios against in-memory history, storage and
//! a recording host.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use monster_portal::core::render::{Page, SidebarModel};
use monster_portal::core::{
    Catalog, Dispatcher, Event, History, Host, Localizer, MemoryHistory, MemoryPrefs, Outcome,
    Point, Router, Translations, WindowPlacement,
};
use monster_portal::models::{
    Item, Language, Region, RegionChange, RegionState, StaticPage, Tag, View, ViewMode,
    search_path,
};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Default)]
struct RecordingHost {
    regions: HashMap<Region, RegionState>,
    page: Option<Page>,
    sidebar: Option<SidebarModel>,
    renders: usize,
    retranslated: Vec<Language>,
    placements: Vec<WindowPlacement>,
}

impl Host for RecordingHost {
    fn render_content(&mut self, page: Page) {
        self.renders += 1;
        self.page = Some(page);
    }

    fn render_sidebar(&mut self, sidebar: SidebarModel) {
        self.sidebar = Some(sidebar);
    }

    fn apply_layout(&mut self, changes: &[RegionChange]) {
        for change in changes {
            self.regions.insert(change.region, change.state);
        }
    }

    fn retranslate(&mut self, i18n: &Localizer) {
        self.retranslated.push(i18n.current_language());
    }

    fn place_window(&mut self, placement: WindowPlacement) {
        self.placements.push(placement);
    }
}

impl RecordingHost {
    fn chrome_visible(&self) -> bool {
        self.regions.get(&Region::Sidebar) == Some(&RegionState::Visible)
            && self.regions.get(&Region::Header) == Some(&RegionState::Visible)
            && self.regions.get(&Region::Footer) == Some(&RegionState::Visible)
            && self.regions.get(&Region::Content) == Some(&RegionState::Framed)
    }

    fn immersive(&self) -> bool {
        [Region::Sidebar, Region::Header, Region::Footer]
            .iter()
            .all(|r| self.regions.get(r) == Some(&RegionState::Hidden))
            && self.regions.get(&Region::Content) == Some(&RegionState::Fullscreen)
    }

    fn card_ids(&self) -> Vec<String> {
        let cards = match &self.page {
            Some(Page::Listing(page)) => &page.cards,
            Some(Page::Search(page)) => &page.cards,
            other => panic!("not a card page: {:?}", other),
        };
        cards.iter().map(|c| c.item_id.clone()).collect()
    }

    fn sidebar_highlighted(&self) -> BTreeSet<String> {
        self.sidebar
            .as_ref()
            .map(|s| s.highlighted().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

type TestRouter = Router<MemoryHistory, RecordingHost>;

fn localizer(prefs: MemoryPrefs) -> Localizer {
    Localizer::restore(Translations::bundled(), Box::new(prefs))
}

fn portal_with(catalog: Catalog, prefs: MemoryPrefs) -> TestRouter {
    let mut router = Router::new(
        Rc::new(catalog),
        localizer(prefs),
        MemoryHistory::new("/"),
        RecordingHost::default(),
    );
    router.start();
    router
}

fn portal() -> TestRouter {
    portal_with(Catalog::bundled(), MemoryPrefs::new())
}

fn item(id: &str, title: &str, tags: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        long_description: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumbnail_url: String::new(),
        content_url: String::new(),
        featured: false,
        controls: String::new(),
    }
}

fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.to_string(),
        name: name.to_string(),
    }
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_start_renders_home_in_chrome_mode() {
    let router = portal();
    assert_eq!(router.view(), Some(&View::Home));
    assert!(router.host().chrome_visible());
    assert!(matches!(router.host().page, Some(Page::Home(_))));
    assert_eq!(router.host().retranslated, vec![Language::En]);
}

#[test]
fn test_exact_route_invokes_only_its_handler() {
    let mut router = portal();
    let promo = Rc::new(Cell::new(0));
    let other = Rc::new(Cell::new(0));

    let p = promo.clone();
    router.add_route("/promo", move || {
        p.set(p.get() + 1);
        Outcome::Render(View::Home)
    });
    let o = other.clone();
    router.add_route("/other", move || {
        o.set(o.get() + 1);
        Outcome::Render(View::Home)
    });

    router.navigate("/promo");
    assert_eq!((promo.get(), other.get()), (1, 0));
    assert_eq!(router.state().current_path, "/promo");
}

#[test]
fn test_standard_exact_paths() {
    let mut router = portal();
    for (path, view) in [
        ("/privacy-policy", View::Static(StaticPage::PrivacyPolicy)),
        ("/terms-of-service", View::Static(StaticPage::TermsOfService)),
        ("/contact", View::Static(StaticPage::Contact)),
        ("/", View::Home),
    ] {
        router.navigate(path);
        assert_eq!(router.view(), Some(&view), "{}", path);
        assert_eq!(router.state().current_path, path);
    }
}

#[test]
fn test_every_item_is_immersive_and_back_restores_chrome() {
    let mut router = portal();
    let ids: Vec<String> = router.catalog().all().iter().map(|i| i.id.clone()).collect();
    assert!(!ids.is_empty());

    for id in ids {
        router.navigate(&format!("/item/{}", id));
        assert!(router.state().is_immersive(), "{}", id);
        assert!(router.host().immersive(), "{}", id);

        router.dispatch(Event::Back);
        // Chrome comes back before the history transition is reported
        assert!(router.host().chrome_visible(), "{}", id);
        assert_eq!(router.state().mode, ViewMode::Chrome);
        assert_eq!(router.state().drag, None);

        router.dispatch(Event::HistoryPopped);
        assert_eq!(router.view(), Some(&View::Home));
        assert!(router.host().chrome_visible());
    }
}

#[test]
fn test_tag_listing_matches_taxonomy() {
    let mut router = portal();
    let tags: Vec<String> = router.catalog().tags().iter().map(|t| t.id.clone()).collect();

    for tag_id in tags {
        router.navigate(&format!("/tag/{}", tag_id));
        let expected: Vec<String> = router
            .catalog()
            .all()
            .iter()
            .filter(|item| tag_id == "all" || item.tags.contains(&tag_id))
            .map(|item| item.id.clone())
            .collect();
        assert_eq!(router.host().card_ids(), expected, "tag {}", tag_id);
    }
}

#[test]
fn test_all_tag_lists_full_catalog() {
    let mut router = portal();
    router.navigate("/tag/all");
    assert_eq!(router.host().card_ids().len(), router.catalog().all().len());
}

#[test]
fn test_unknown_ids_redirect_home() {
    let mut router = portal();
    for path in ["/tag/nonexistent", "/item/nonexistent", "/nowhere", "/item/", "/tag/"] {
        router.navigate("/contact");
        router.navigate(path);
        assert_eq!(router.state().current_path, "/", "{}", path);
        assert_eq!(router.view(), Some(&View::Home), "{}", path);
        assert_eq!(router.history().current_path(), "/");
    }
}

#[test]
fn test_scenario_new_tag_lists_item() {
    let catalog = Catalog::new(
        vec![
            item("A", "Alpha", &["new", "fantasy"]),
            item("B", "Beta", &["popular"]),
        ],
        vec![tag("all", "All Games"), tag("new", "New Games"), tag("fantasy", "Fantasy")],
    );
    let mut router = portal_with(catalog, MemoryPrefs::new());

    router.navigate("/tag/new");
    assert_eq!(router.host().card_ids(), vec!["A"]);

    router.navigate("/tag/nonexistent");
    assert_eq!(router.state().current_path, "/");
    assert!(matches!(router.host().page, Some(Page::Home(_))));
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_dungeon_scenario() {
    let mut router = portal();
    router.navigate("/search/Dungeon");

    assert_eq!(router.host().card_ids(), vec!["monster-survivors-dungeon"]);
    let Some(Page::Search(page)) = &router.host().page else {
        panic!("expected search page");
    };
    assert_eq!(page.query, "Dungeon");
    assert_eq!(page.summary, "1 game found for \"Dungeon\"");
}

#[test]
fn test_search_is_case_insensitive_for_every_title() {
    let mut router = portal();
    let titles: Vec<(String, String)> = router
        .catalog()
        .all()
        .iter()
        .map(|i| (i.id.clone(), i.title.clone()))
        .collect();

    for (id, title) in titles {
        for query in [title.to_lowercase(), title.to_uppercase()] {
            router.navigate(&search_path(&query));
            assert!(router.host().card_ids().contains(&id), "{} for {}", id, query);
        }
    }
}

#[test]
fn test_search_without_matches() {
    let mut router = portal();
    router.navigate(&search_path("no such game anywhere"));
    assert!(router.host().card_ids().is_empty());
    let Some(Page::Search(page)) = &router.host().page else {
        panic!("expected search page");
    };
    assert_eq!(page.summary, "No games found for your search.");
}

#[test]
fn test_search_query_round_trips_through_path() {
    let mut router = portal();
    router.navigate(&search_path("sea monsters"));
    assert_eq!(router.view(), Some(&View::Search("sea monsters".to_string())));
    assert_eq!(router.host().card_ids(), vec!["monster-survivors-pirate"]);
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_highlighting() {
    let mut router = portal();
    assert_eq!(router.host().sidebar_highlighted(), BTreeSet::from(["all".to_string()]));

    router.navigate("/tag/popular");
    assert_eq!(router.host().sidebar_highlighted(), BTreeSet::from(["popular".to_string()]));

    // Static pages keep the previous selection
    router.navigate("/privacy-policy");
    assert_eq!(router.host().sidebar_highlighted(), BTreeSet::from(["popular".to_string()]));

    router.navigate("/item/monster-survivors-fantasy");
    assert_eq!(
        router.state().highlighted,
        BTreeSet::from(["fantasy".to_string(), "new".to_string()])
    );

    router.navigate(&search_path("x"));
    assert_eq!(router.state().highlighted, BTreeSet::from(["all".to_string()]));
}

#[test]
fn test_panel_toggles_and_closes_on_navigation() {
    let mut router = portal();
    router.dispatch(Event::TogglePanel);
    assert!(router.state().panel.is_open());
    assert_eq!(router.host().regions[&Region::Sidebar], RegionState::Overlay);

    router.navigate("/tag/new");
    assert!(!router.state().panel.is_open());
    assert_eq!(router.host().regions[&Region::Sidebar], RegionState::Visible);

    router.dispatch(Event::TogglePanel);
    router.dispatch(Event::ClosePanel);
    assert!(!router.state().panel.is_open());
}

#[test]
fn test_duplicate_id_resolves_to_first_record() {
    let mut router = portal();
    let first = router
        .catalog()
        .all()
        .iter()
        .find(|i| i.id == "monster-survivors-strategy")
        .map(|i| i.thumbnail_url.clone())
        .unwrap();

    router.navigate("/item/monster-survivors-strategy");
    let Some(Page::Detail(page)) = &router.host().page else {
        panic!("expected detail page");
    };
    assert_eq!(page.thumbnail_url, first);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_follows_pointer_and_ends_anywhere() {
    let mut router = portal();
    router.navigate("/item/monster-survivors-classic");
    assert_eq!(router.host().placements.last(), Some(&WindowPlacement::default()));

    router.dispatch(Event::DragStart {
        pointer: Point::new(130.0, 60.0),
        origin: Point::new(100.0, 50.0),
    });
    router.dispatch(Event::DragMove(Point::new(400.0, 300.0)));
    assert_eq!(
        router.host().placements.last(),
        Some(&WindowPlacement {
            position: Some(Point::new(370.0, 290.0)),
            dragging: true,
        })
    );

    // Released far outside the window
    router.dispatch(Event::DragMove(Point::new(5000.0, 5000.0)));
    router.dispatch(Event::DragEnd);
    let last = router.host().placements.last().copied().unwrap();
    assert!(!last.dragging);
    assert_eq!(last.position, Some(Point::new(4970.0, 4990.0)));

    // Moves after release are ignored
    let count = router.host().placements.len();
    router.dispatch(Event::DragMove(Point::new(0.0, 0.0)));
    assert_eq!(router.host().placements.len(), count);
}

#[test]
fn test_reentering_detail_resets_window_position() {
    let mut router = portal();
    router.navigate("/item/monster-survivors-classic");
    router.dispatch(Event::DragStart {
        pointer: Point::new(10.0, 10.0),
        origin: Point::default(),
    });
    router.dispatch(Event::DragMove(Point::new(50.0, 50.0)));
    router.dispatch(Event::DragEnd);

    router.navigate("/");
    assert_eq!(router.state().drag, None);
    router.navigate("/item/monster-survivors-classic");
    assert_eq!(router.state().drag.and_then(|d| d.position()), None);
    assert_eq!(router.host().placements.last(), Some(&WindowPlacement::default()));
}

// ============================================================================
// Localization
// ============================================================================

#[test]
fn test_language_switch_rerenders_and_is_idempotent() {
    let mut router = portal();
    let english_page = router.host().page.clone();
    let english_sidebar = router.host().sidebar.clone();

    router.switch_language(Language::Zh);
    assert_eq!(router.host().retranslated, vec![Language::En, Language::Zh]);
    let chinese_page = router.host().page.clone();
    assert_ne!(chinese_page, english_page);
    assert_eq!(
        router.host().sidebar.as_ref().map(|s| s.heading.as_str()),
        Some("游戏分类")
    );

    // Same language again: nothing changes, nothing is re-rendered
    let renders = router.host().renders;
    router.switch_language(Language::Zh);
    assert_eq!(router.host().renders, renders);
    assert_eq!(router.host().page, chinese_page);

    router.switch_language(Language::En);
    assert_eq!(router.host().page, english_page);
    assert_eq!(router.host().sidebar, english_sidebar);
}

#[test]
fn test_switch_and_back_restores_every_key() {
    let mut router = portal();
    let keys: Vec<String> = router
        .localizer()
        .translations()
        .keys()
        .into_iter()
        .map(str::to_string)
        .collect();
    let before: Vec<String> = keys.iter().map(|k| router.localizer().translate(k)).collect();

    router.switch_language(Language::Zh);
    router.switch_language(Language::En);

    let after: Vec<String> = keys.iter().map(|k| router.localizer().translate(k)).collect();
    assert_eq!(before, after);
}

#[test]
fn test_language_preference_restored_and_persisted() {
    let prefs = MemoryPrefs::new().with_entry("language", "zh");
    let mut router = portal_with(Catalog::bundled(), prefs.clone());
    assert_eq!(router.localizer().current_language(), Language::Zh);
    let Some(Page::Home(home)) = &router.host().page else {
        panic!("expected home page");
    };
    assert_eq!(home.hero.as_ref().map(|h| h.badge.as_str()), Some("推荐游戏"));

    router.switch_language(Language::En);
    assert_eq!(prefs.get("language").as_deref(), Some("en"));
}

#[test]
fn test_invalid_or_unavailable_preference_falls_back() {
    let router = portal_with(
        Catalog::bundled(),
        MemoryPrefs::new().with_entry("language", "fr"),
    );
    assert_eq!(router.localizer().current_language(), Language::En);

    let mut router = portal_with(Catalog::bundled(), MemoryPrefs::unavailable());
    assert_eq!(router.localizer().current_language(), Language::En);
    router.switch_language(Language::Zh);
    assert_eq!(router.localizer().current_language(), Language::Zh);
}

#[test]
fn test_language_change_keeps_current_view() {
    let mut router = portal();
    router.navigate("/tag/popular");
    router.switch_language(Language::Zh);
    assert_eq!(router.view(), Some(&View::Tag("popular".to_string())));
    let Some(Page::Listing(page)) = &router.host().page else {
        panic!("expected listing page");
    };
    assert_eq!(page.title, "热门游戏");
}

// ============================================================================
// Event queue
// ============================================================================

/// Host that navigates from inside its first content render, the way a
/// card callback firing during a render pass would.
struct EagerHost {
    log: Rc<RefCell<Vec<String>>>,
    dispatcher: Rc<RefCell<Option<Dispatcher>>>,
    fired: bool,
}

impl Host for EagerHost {
    fn render_content(&mut self, page: Page) {
        let kind = match page {
            Page::Home(_) => "home",
            Page::Listing(_) => "listing",
            _ => "other",
        };
        self.log.borrow_mut().push(format!("content:{}", kind));
        if !self.fired {
            self.fired = true;
            if let Some(dispatcher) = self.dispatcher.borrow().as_ref() {
                dispatcher.navigate("/tag/popular");
            }
        }
    }

    fn render_sidebar(&mut self, _: SidebarModel) {
        self.log.borrow_mut().push("sidebar".to_string());
    }

    fn apply_layout(&mut self, _: &[RegionChange]) {}
    fn retranslate(&mut self, _: &Localizer) {}
    fn place_window(&mut self, _: WindowPlacement) {}
}

#[test]
fn test_navigation_during_render_is_queued_not_nested() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let slot = Rc::new(RefCell::new(None));
    let host = EagerHost {
        log: log.clone(),
        dispatcher: slot.clone(),
        fired: false,
    };
    let router = Rc::new(RefCell::new(Router::new(
        Rc::new(Catalog::bundled()),
        localizer(MemoryPrefs::new()),
        MemoryHistory::new("/"),
        host,
    )));
    let mailbox = router.borrow().mailbox();
    let dispatcher = Dispatcher::new(mailbox, router.clone());
    *slot.borrow_mut() = Some(dispatcher.clone());

    dispatcher.send(Event::Resolve);

    assert_eq!(
        *log.borrow(),
        vec!["content:home", "sidebar", "content:listing", "sidebar"]
    );
    assert_eq!(router.borrow().state().current_path, "/tag/popular");
    assert!(router.borrow().mailbox().is_empty());
}
