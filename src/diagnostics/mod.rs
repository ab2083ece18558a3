pub mod bootstrap;
pub mod sink;

pub use bootstrap::{Bootstrap, DEFAULT_SEVERITY, READY_LINE, STARTUP_LINE};
pub use sink::{BufferSink, ConsoleSink, DiagnosticSink};
