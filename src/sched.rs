//! Scoped scheduler resources.
//!
//! Recurring callbacks are acquired at component init and cancelled when the
//! owning handle drops, so no animation loop or interval survives component
//! teardown. One-shot timeouts may opt out via `forget()` where cancellation
//! has no observable effect.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Repeating animation-frame loop. Dropping the handle cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    callback: SharedCallback,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let callback: SharedCallback = Rc::new(RefCell::new(None));

        let id_for_tick = raf_id.clone();
        let callback_for_tick = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame();
            id_for_tick.set(request_frame(&callback_for_tick));
        }) as Box<dyn FnMut()>));

        raf_id.set(request_frame(&callback));
        Self { raf_id, callback }
    }
}

fn request_frame(callback: &SharedCallback) -> Option<i32> {
    let window = web::window()?;
    let slot = callback.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.raf_id.take(), web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Repeating timer. Dropping the handle clears the interval.
pub struct Interval {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn every(ms: i32, mut handler: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .ok()
        });
        Self {
            id,
            _callback: callback,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.id.take(), web::window()) {
            window.clear_interval_with_handle(id);
        }
    }
}

/// One-shot timer. Dropping the handle before it fires cancels it.
pub struct Timeout {
    id: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    pub fn once(ms: i32, handler: impl FnOnce() + 'static) -> Self {
        let mut handler = Some(handler);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(h) = handler.take() {
                h();
            }
        }) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .ok()
        });
        Self {
            id,
            callback: Some(callback),
        }
    }

    /// Fire-and-forget: the callback stays alive for the page's lifetime.
    pub fn forget(mut self) {
        self.id = None;
        if let Some(cb) = self.callback.take() {
            cb.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.id.take(), web::window()) {
            window.clear_timeout_with_handle(id);
        }
    }
}

/// Resolve after `ms` on a JS timer; this is the simulated network latency
/// suspension point.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web::window() {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
