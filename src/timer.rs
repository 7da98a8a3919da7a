//! `setTimeout` / `setInterval` handles that clear themselves on drop.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Timeout {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F: FnOnce() + 'static>(ms: i32, f: F) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::once(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| anyhow!("setTimeout failed: {:?}", e))?;
        Ok(Self {
            id: Some(id),
            _callback: callback,
        })
    }

    /// Let the timeout fire even though nobody holds the handle.
    pub fn forget(mut self) {
        self.id = None;
        std::mem::forget(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.id.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F: FnMut() + 'static>(ms: i32, f: F) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| anyhow!("setInterval failed: {:?}", e))?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
