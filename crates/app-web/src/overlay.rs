use app_core::Mode;
use web_sys as web;

/// Hides the loading screen. Also the "loading complete" signal when
/// gesture setup fails: the scene proceeds without gesture control.
#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loader") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_ui_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id("ui-overlay") {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

/// Toggles the UI overlay. Display-only; core state is unaffected.
pub fn toggle_ui(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("ui-overlay") {
        let cl = el.class_list();
        if is_ui_hidden(document) {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        } else {
            _ = cl.add_1("hidden");
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// Reflects the current display mode in the overlay label.
pub fn set_mode_label(document: &web::Document, mode: Mode) {
    crate::dom::set_text(document, "mode-label", mode.label());
}
