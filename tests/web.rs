#![cfg(target_arch = "wasm32")]

use monster_portal::core::{Localizer, MemoryPrefs, Translations};
use monster_portal::models::{Language, Region, RegionState};
use monster_portal::utils::dom;
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

fn append(tag: &str, id: &str) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_static_text_follows_language() {
    let heading = append("h4", "web-test-heading");
    heading.set_attribute("data-i18n", "allGames").unwrap();
    let input = append("input", "web-test-input");
    input.set_attribute("data-i18n-placeholder", "searchGames").unwrap();

    let mut i18n = Localizer::new(Translations::bundled(), Box::new(MemoryPrefs::new()));
    assert!(dom::apply_translations(&i18n).unwrap() >= 2);
    assert_eq!(heading.text_content().as_deref(), Some("All Games"));
    assert_eq!(input.get_attribute("placeholder").as_deref(), Some("Search games..."));

    i18n.switch_language(Language::Zh);
    dom::apply_translations(&i18n).unwrap();
    assert_ne!(heading.text_content().as_deref(), Some("All Games"));

    heading.remove();
    input.remove();
}

#[wasm_bindgen_test]
fn test_region_class_replaced() {
    let aside = append("aside", "web-test-sidebar");
    aside.set_class_name("stale");

    dom::set_class("web-test-sidebar", RegionState::Overlay.class_name(Region::Sidebar)).unwrap();
    assert_eq!(aside.class_name(), "block mobile-sidebar");

    assert!(dom::set_class("web-test-missing", "hidden").is_err());
    aside.remove();
}
