//! Owned browser callbacks: animation frames, timeouts and event listeners.
//!
//! Each wrapper keeps its `Closure` alive and removes or cancels it when
//! cleared or dropped, so teardown leaves nothing registered with the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

#[derive(Default)]
struct FrameInner {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    id: Cell<Option<i32>>,
}

/// A single re-armable `requestAnimationFrame` slot.
#[derive(Clone, Default)]
pub struct AnimationFrame {
    inner: Rc<FrameInner>,
}

impl AnimationFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&self, mut f: impl FnMut(f64) + 'static) {
        let inner = Rc::downgrade(&self.inner);
        let cb = Closure::wrap(Box::new(move |ts: f64| {
            if let Some(inner) = inner.upgrade() {
                inner.id.set(None);
            }
            f(ts);
        }) as Box<dyn FnMut(f64)>);
        *self.inner.callback.borrow_mut() = Some(cb);
    }

    /// Requests the next frame unless one is already pending.
    pub fn request(&self) -> bool {
        if self.inner.id.get().is_some() {
            return false;
        }
        let Some(window) = web_sys::window() else {
            return false;
        };
        let callback = self.inner.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return false;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.inner.id.set(Some(id));
                true
            }
            Err(_) => false,
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.inner.id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    /// Cancels and releases the callback (breaking any self-reference).
    pub fn clear(&self) {
        self.cancel();
        self.inner.callback.borrow_mut().take();
    }
}

#[derive(Default)]
struct TimeoutInner {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    id: Cell<Option<i32>>,
}

/// A single re-armable `setTimeout` slot. Arming replaces the pending one.
#[derive(Clone, Default)]
pub struct Timeout {
    inner: Rc<TimeoutInner>,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&self, mut f: impl FnMut() + 'static) {
        let inner = Rc::downgrade(&self.inner);
        let cb = Closure::wrap(Box::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.id.set(None);
            }
            f();
        }) as Box<dyn FnMut()>);
        *self.inner.callback.borrow_mut() = Some(cb);
    }

    pub fn arm(&self, delay_ms: f64) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.inner.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        let delay = delay_ms.max(0.0).ceil() as i32;
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay) {
            self.inner.id.set(Some(id));
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.inner.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }

    pub fn clear(&self) {
        self.cancel();
        self.inner.callback.borrow_mut().take();
    }
}

/// An event listener removed from its target on drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        f: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
