#![cfg(target_arch = "wasm32")]
use field_core::{Animator, Field, FieldParams, StopToken};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod effects;
mod frame;
mod nav;
mod startup;

thread_local! {
    // Token of the running particle loop, tripped by `stop_particles`.
    static LOOP_TOKEN: RefCell<Option<StopToken>> = const { RefCell::new(None) };
}

fn wire_viewport_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    animator: &Rc<RefCell<frame::FieldAnimator>>,
) {
    let win = window.clone();
    let canvas = canvas.clone();
    let animator = animator.clone();
    dom::add_listener(window, "resize", move |_| {
        let vp = dom::viewport(&win);
        dom::sync_canvas_to_viewport(&canvas, vp);
        animator.borrow_mut().field.resize(vp);
    });
}

fn start_particles(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(constants::CANVAS_ID) else {
        log::info!("no #{} canvas; particle field off", constants::CANVAS_ID);
        return Ok(());
    };
    let Ok(canvas) = canvas_el.dyn_into::<web::HtmlCanvasElement>() else {
        log::warn!("#{} is not a canvas; particle field off", constants::CANVAS_ID);
        return Ok(());
    };
    let Some(surface) = canvas::CanvasSurface::from_canvas(&canvas) else {
        log::warn!("2d context unavailable; particle field off");
        return Ok(());
    };

    let vp = dom::viewport(window);
    dom::sync_canvas_to_viewport(&canvas, vp);
    let mut field = Field::from_entropy(FieldParams::default());
    field.initialize(vp);
    log::info!(
        "[field] {} particles for {}x{} viewport",
        field.particles().len(),
        vp.width(),
        vp.height()
    );

    let animator = Rc::new(RefCell::new(Animator::new(field, surface)));
    wire_viewport_resize(window, &canvas, &animator);
    let token = animator.borrow().token();
    LOOP_TOKEN.with(|t| *t.borrow_mut() = Some(token));
    frame::start_loop(animator);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt the particle animation; the canvas keeps its last frame.
#[wasm_bindgen]
pub fn stop_particles() {
    LOOP_TOKEN.with(|t| {
        if let Some(token) = t.borrow().as_ref() {
            token.stop();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    startup::run_stage("particle field", || start_particles(&window, &document));
    startup::run_stage("fade-in", || effects::wire_fade_in(&document));
    effects::wire_header_scroll(&window, &document);
    effects::wire_smooth_anchors(&document);
    Ok(())
}
