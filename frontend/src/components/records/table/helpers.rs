//! DOM feedback helpers: a blocking alert for failures and a transient toast
//! for confirmations.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Blocking browser alert. Used for fetch and save failures so the user sees
/// the diagnostic detail before continuing.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Temporary notification at the bottom of the page, removed after a few
/// seconds. Used for non-blocking confirmations such as a successful save.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let toast: HtmlElement = toast.unchecked_into();
            let style = toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "24px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "#2e7d32").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "8px 16px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "1000").ok();

            if body.append_child(&toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = toast.parent_node() {
                        parent.remove_child(&toast).ok();
                    }
                });
            }
        }
    }
}
