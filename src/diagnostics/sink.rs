use std::cell::RefCell;

use wasm_bindgen::JsValue;

/// Destination for diagnostic lines.
///
/// The bootstrap writes through this seam instead of a process-wide
/// console, so tests assert on captured output rather than scraping the
/// host's sink. Writing cannot fail.
pub trait DiagnosticSink {
    fn write_line(&self, line: &str);
}

/// Browser console sink. Every line goes through `console.log` whatever
/// its severity tag; the tag only changes the text.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

/// In-memory sink that records every line, in order.
#[derive(Default)]
pub struct BufferSink {
    lines: RefCell<Vec<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl DiagnosticSink for BufferSink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
