//! Event Listener Guards
//!
//! Registering returns a guard; dropping it detaches the listener again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use feedrr_listing::UiResult;

use crate::dom::js_err;

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> UiResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
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

/// Every listener one behavior registered
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn push(&mut self, listener: Listener) {
        self.0.push(listener);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Leave the listeners attached for the rest of the page lifetime
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}
