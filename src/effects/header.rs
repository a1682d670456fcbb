use crate::constants::HEADER_SELECTOR;
use crate::dom;
use crate::nav::header_style;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply(header: &web::HtmlElement, scroll_y: f64) {
    let style = header_style(scroll_y);
    let css = header.style();
    _ = css.set_property("background", style.background);
    _ = css.set_property("box-shadow", style.box_shadow);
}

/// Darken the site header and give it a drop shadow once the page scrolls.
pub fn wire_header_scroll(window: &web::Window, document: &web::Document) {
    let Some(header) = document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::info!("no {} on page; header effect off", HEADER_SELECTOR);
        return;
    };
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_| {
        apply(&header, win.scroll_y().unwrap_or(0.0));
    });
}
