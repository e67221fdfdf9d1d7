//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, EventTarget, Storage, Window};

use crate::config::{I18N_ATTR, I18N_PLACEHOLDER_ATTR};
use crate::core::error::DomError;
use crate::core::i18n::Localizer;

/// Class toggled on elements that are shown on demand.
pub const HIDDEN_CLASS: &str = "hidden";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Result<Document, DomError> {
    window().and_then(|w| w.document()).ok_or(DomError::NoDocument)
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// Replace the class list of the element with `id`.
pub fn set_class(id: &str, class_name: &str) -> Result<(), DomError> {
    element_by_id(id)?.set_class_name(class_name);
    Ok(())
}

pub fn set_text(id: &str, text: &str) -> Result<(), DomError> {
    element_by_id(id)?.set_text_content(Some(text));
    Ok(())
}

/// Flip the `hidden` class on the element with `id`.
pub fn toggle_hidden(id: &str) -> Result<(), DomError> {
    let _ = element_by_id(id)?.class_list().toggle(HIDDEN_CLASS);
    Ok(())
}

pub fn hide(id: &str) -> Result<(), DomError> {
    let _ = element_by_id(id)?.class_list().add_1(HIDDEN_CLASS);
    Ok(())
}

/// Set the document language (`<html lang>`).
pub fn set_document_lang(code: &str) -> Result<(), DomError> {
    let root = document()?.document_element().ok_or(DomError::NoDocument)?;
    let _ = root.set_attribute("lang", code);
    Ok(())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document()?
        .query_selector_all(selector)
        .map_err(|_| DomError::MissingElement(selector.to_string()))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

// =============================================================================
// Translation
// =============================================================================

/// Re-translate static document text.
///
/// Elements carrying `data-i18n` get their text replaced; elements carrying
/// `data-i18n-placeholder` get their placeholder replaced. Returns the
/// number of elements updated.
pub fn apply_translations(i18n: &Localizer) -> Result<usize, DomError> {
    let mut updated = 0;

    for element in query_all(&format!("[{}]", I18N_ATTR))? {
        if let Some(key) = element.get_attribute(I18N_ATTR) {
            element.set_text_content(Some(&i18n.translate(&key)));
            updated += 1;
        }
    }

    for element in query_all(&format!("[{}]", I18N_PLACEHOLDER_ATTR))? {
        if let Some(key) = element.get_attribute(I18N_PLACEHOLDER_ATTR) {
            let _ = element.set_attribute("placeholder", &i18n.translate(&key));
            updated += 1;
        }
    }

    Ok(updated)
}

// =============================================================================
// Events and Fullscreen
// =============================================================================

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(?err, event, "failed to attach listener");
    }
    // Keep the closure alive for the lifetime of the app
    closure.forget();
}

/// Ask the browser to show `element` fullscreen.
///
/// Only synchronous refusals surface here; asynchronous ones are reported
/// by the browser through `fullscreenerror`.
pub fn request_fullscreen(element: &Element) -> Result<(), DomError> {
    element
        .request_fullscreen()
        .map_err(|err| DomError::Fullscreen(format!("{:?}", err)))
}
