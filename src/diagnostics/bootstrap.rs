use std::rc::Rc;

use super::sink::DiagnosticSink;

pub const STARTUP_LINE: &str = "Investify app loaded successfully!";

pub const READY_LINE: &str = "DOM loaded, Investify ready!";

pub const DEFAULT_SEVERITY: &str = "info";

/// Emits the fixed bring-up lines and severity-tagged messages.
///
/// Clones share the underlying sink, so the ready callback can keep
/// writing to the same channel the startup line went to.
#[derive(Clone)]
pub struct Bootstrap {
    sink: Rc<dyn DiagnosticSink>,
}

impl Bootstrap {
    pub fn new(sink: Rc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn announce_startup(&self) {
        self.sink.write_line(STARTUP_LINE);
    }

    pub fn announce_ready(&self) {
        self.sink.write_line(READY_LINE);
    }

    /// Emit `message` prefixed with its upper-cased severity label.
    ///
    /// The label is free text and is not validated; `None` means "info".
    /// Empty messages are accepted as-is.
    pub fn show_message(&self, message: &str, severity: Option<&str>) {
        let severity = severity.unwrap_or(DEFAULT_SEVERITY);
        self.sink
            .write_line(&format!("{}: {}", severity.to_uppercase(), message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::BufferSink;

    fn capturing() -> (Bootstrap, Rc<BufferSink>) {
        let sink = Rc::new(BufferSink::new());
        (Bootstrap::new(sink.clone()), sink)
    }

    #[test]
    fn startup_line_comes_out_verbatim_and_first() {
        let (bootstrap, sink) = capturing();
        bootstrap.announce_startup();
        bootstrap.show_message("Saved", None);
        assert_eq!(sink.lines()[0], "Investify app loaded successfully!");
    }

    #[test]
    fn explicit_severity_is_uppercased() {
        let (bootstrap, sink) = capturing();
        bootstrap.show_message("Operation failed", Some("error"));
        assert_eq!(sink.lines(), vec!["ERROR: Operation failed"]);
    }

    #[test]
    fn missing_severity_defaults_to_info() {
        let (bootstrap, sink) = capturing();
        bootstrap.show_message("Saved", None);
        assert_eq!(sink.lines(), vec!["INFO: Saved"]);
    }

    #[test]
    fn empty_message_still_gets_a_tag() {
        let (bootstrap, sink) = capturing();
        bootstrap.show_message("", Some("warning"));
        assert_eq!(sink.lines(), vec!["WARNING: "]);
    }

    #[test]
    fn severity_is_not_an_enumeration() {
        let (bootstrap, sink) = capturing();
        bootstrap.show_message("entering maintenance", Some("wArNiNg-ish"));
        assert_eq!(sink.lines(), vec!["WARNING-ISH: entering maintenance"]);
    }

    #[test]
    fn ready_line_comes_out_verbatim() {
        let (bootstrap, sink) = capturing();
        bootstrap.announce_ready();
        assert_eq!(sink.lines(), vec!["DOM loaded, Investify ready!"]);
    }

    #[test]
    fn clones_write_to_the_same_sink() {
        let (bootstrap, sink) = capturing();
        let other = bootstrap.clone();
        bootstrap.announce_startup();
        other.announce_ready();
        assert_eq!(sink.lines().len(), 2);
    }
}
