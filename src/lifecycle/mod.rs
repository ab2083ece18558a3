pub mod ready;

pub use ready::{OnceGate, ReadySubscription, on_document_ready};
