use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget};

const READY_EVENT: &str = "DOMContentLoaded";

/// Holds a callback and runs it at most once, however often the
/// surrounding event source delivers.
pub struct OnceGate {
    callback: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl OnceGate {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: RefCell::new(Some(Box::new(callback))),
        }
    }

    /// Run the callback if it has not run yet. Returns whether this call
    /// was the one that ran it.
    pub fn fire(&self) -> bool {
        // release the borrow before invoking, in case the callback
        // reaches back into the gate
        let callback = self.callback.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.callback.borrow().is_none()
    }
}

/// Subscribe `callback` to the document's `DOMContentLoaded` event.
///
/// The callback runs at most once per subscription even if the event is
/// delivered again. If the host never fires the event, the callback
/// simply never runs. The returned handle keeps the listener alive; drop
/// it (or call [`ReadySubscription::unsubscribe`]) to detach.
pub fn on_document_ready(
    document: &Document,
    callback: impl FnOnce() + 'static,
) -> Result<ReadySubscription, JsValue> {
    let gate = Rc::new(OnceGate::new(callback));

    let closure = {
        let gate = Rc::clone(&gate);
        Closure::wrap(Box::new(move |_event: Event| {
            gate.fire();
        }) as Box<dyn FnMut(Event)>)
    };

    let listener: &Function = closure.as_ref().unchecked_ref();
    let target: &EventTarget = document.as_ref();
    target.add_event_listener_with_callback(READY_EVENT, listener)?;

    Ok(ReadySubscription {
        target: target.clone(),
        closure: Some(closure),
        gate,
    })
}

/// Live ready-listener registration.
///
/// Owns the JS-side closure, so the listener cannot outlive its Rust
/// state; dropping the handle detaches it from the document.
pub struct ReadySubscription {
    target: EventTarget,
    closure: Option<Closure<dyn FnMut(Event)>>,
    gate: Rc<OnceGate>,
}

impl ReadySubscription {
    /// Detach the listener. The callback will not run afterwards; calling
    /// this twice is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(READY_EVENT, closure.as_ref().unchecked_ref());
        }
    }

    pub fn has_fired(&self) -> bool {
        self.gate.has_fired()
    }
}

impl Drop for ReadySubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
