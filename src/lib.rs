use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub mod diagnostics;
pub mod lifecycle;

use diagnostics::{Bootstrap, ConsoleSink, DiagnosticSink};
use lifecycle::ReadySubscription;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

#[wasm_bindgen]
pub struct InvestifyApp {
    bootstrap: Bootstrap,
    ready: Option<ReadySubscription>,
}

#[wasm_bindgen]
impl InvestifyApp {
    /// Bring the app up against the browser console: emits the startup
    /// line and arms the one-shot ready listener.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<InvestifyApp, JsValue> {
        Self::with_sink(Rc::new(ConsoleSink))
    }

    /// Log `message` prefixed with an upper-cased severity label
    /// (defaults to "info" when the second argument is omitted).
    #[wasm_bindgen(js_name = showMessage)]
    pub fn show_message(&self, message: String, severity: Option<String>) {
        self.bootstrap.show_message(&message, severity.as_deref());
    }

    /// Detach the ready listener. The deferred ready line will no longer
    /// be emitted; the normal page flow never calls this.
    pub fn dispose(&mut self) {
        if let Some(mut subscription) = self.ready.take() {
            subscription.unsubscribe();
        }
    }
}

impl InvestifyApp {
    /// Bring-up over an explicit sink. `new` wires the console; tests
    /// inject a capturing sink here.
    pub fn with_sink(sink: Rc<dyn DiagnosticSink>) -> Result<InvestifyApp, JsValue> {
        log::info!("Investify bootstrap initializing");

        let bootstrap = Bootstrap::new(sink);
        bootstrap.announce_startup();

        // No document means no ready signal will ever arrive; the
        // deferred line is skipped silently rather than reported.
        let ready = match web_sys::window().and_then(|window| window.document()) {
            Some(document) => {
                let on_ready = bootstrap.clone();
                Some(lifecycle::on_document_ready(&document, move || {
                    on_ready.announce_ready()
                })?)
            }
            None => None,
        };

        Ok(InvestifyApp { bootstrap, ready })
    }
}
