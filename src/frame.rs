use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

struct LoopInner {
    cancelled: Cell<bool>,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        if let Some(cb) = tick.as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    // Dropping the closure breaks the Rc cycle that keeps the loop alive.
    fn release(&self) {
        drop(self.tick.borrow_mut().take());
    }
}

/// A per-frame task on the host's `requestAnimationFrame` tick.
///
/// The task keeps itself alive (and runs for the page lifetime) until the
/// callback returns [`LoopControl::Stop`] or [`FrameLoop::cancel`] is called.
/// Dropping the handle does not stop it.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> anyhow::Result<Self>
    where
        F: FnMut() -> LoopControl + 'static,
    {
        if web::window().is_none() {
            return Err(anyhow!("no window"));
        }
        let inner = Rc::new(LoopInner {
            cancelled: Cell::new(false),
            running: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.pending.set(None);
            if inner_tick.cancelled.get() {
                inner_tick.release();
                return;
            }
            inner_tick.running.set(true);
            let control = on_frame();
            inner_tick.running.set(false);
            if control == LoopControl::Stop || inner_tick.cancelled.get() {
                inner_tick.release();
                return;
            }
            inner_tick.schedule();
        }) as Box<dyn FnMut()>));
        inner.schedule();
        Ok(Self { inner })
    }

    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
        if let Some(id) = self.inner.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Inside the callback the loop releases itself once it returns.
        if !self.inner.running.get() {
            self.inner.release();
        }
    }

    pub fn is_active(&self) -> bool {
        !self.inner.cancelled.get() && self.inner.tick.borrow().is_some()
    }
}
