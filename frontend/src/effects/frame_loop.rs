use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `on_frame` once per animation frame until dropped.
///
/// Dropping cancels the pending frame and frees the callback, which also
/// breaks the reference cycle the callback keeps to itself.
pub struct FrameLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next_id = frame_id.clone();
        let next_callback = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            next_id.set(None);
            on_frame(timestamp);
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(cb) = next_callback.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(e) => log::warn!("Animation frame request failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = match callback.borrow().as_ref() {
            Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return None,
        };
        match first {
            Ok(id) => frame_id.set(Some(id)),
            Err(e) => {
                log::warn!("Could not start animation loop: {:?}", e);
                callback.borrow_mut().take();
                return None;
            }
        }

        Some(Self { frame_id, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}
