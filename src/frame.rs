use crate::canvas::CanvasSurface;
use field_core::{Animator, Step};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FieldAnimator = Animator<CanvasSurface, StdRng>;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `animator` from requestAnimationFrame: one step per repaint, and no
/// further frames once a step reports `Stop` or fails.
pub fn start_loop(animator: Rc<RefCell<FieldAnimator>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let outcome = animator.borrow_mut().step();
        match outcome {
            Ok(Step::Continue) => request_frame(&tick_clone),
            Ok(Step::Stop) => {
                log::info!(
                    "particle loop stopped after {} frames",
                    animator.borrow().frames()
                );
            }
            Err(e) => log::error!("particle loop halted: {}", e),
        }
    }) as Box<dyn FnMut()>));
    log::info!("particle loop started");
    request_frame(&tick);
}
