use crate::constants::*;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Reveal `.fade-in` elements (and every `section`) the first time they
/// scroll into view.
pub fn wire_fade_in(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(FADE_IN_ROOT_MARGIN);
    options.set_threshold(&FADE_IN_THRESHOLD.into());
    let observer = web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let mut observed = 0usize;
    for el in dom::query_all(document, FADE_IN_SELECTOR) {
        observer.observe(&el);
        observed += 1;
    }
    for section in dom::query_all(document, SECTION_SELECTOR) {
        _ = section.class_list().add_1(FADE_IN_CLASS);
        observer.observe(&section);
        observed += 1;
    }
    log::info!("fade-in observing {} elements", observed);
    Ok(())
}
