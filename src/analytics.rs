//! Fire-and-forget analytics breadcrumbs. Events never block the page
//! flow and a missing or broken analytics global must not break it either,
//! so the JS shim swallows everything.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(inline_js = r#"
export function trackEventJs(name) {
    try {
        if (globalThis.umami && typeof globalThis.umami.track === 'function') {
            globalThis.umami.track(name);
        }
    } catch (e) {
        // analytics must never take the page down with it
    }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = trackEventJs)]
    fn track_event_js(name: &str);
}

#[cfg(target_arch = "wasm32")]
pub fn track_event(name: &str) {
    track_event_js(name);
}

// Off-wasm the events go into a thread-local capture so tests can assert
// on emission order.
#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<String>> = std::cell::RefCell::new(Vec::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn track_event(name: &str) {
    CAPTURED.with(|events| events.borrow_mut().push(name.to_string()));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn captured_events() -> Vec<String> {
    CAPTURED.with(|events| events.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_captured_events() {
    CAPTURED.with(|events| events.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_preserves_emission_order() {
        clear_captured_events();
        track_event("file_selected");
        track_event("file_loaded");
        track_event("spotify_loaded");
        assert_eq!(
            captured_events(),
            vec!["file_selected", "file_loaded", "spotify_loaded"]
        );
        clear_captured_events();
        assert!(captured_events().is_empty());
    }
}
