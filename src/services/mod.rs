pub mod document;
pub mod metrics;
pub mod providers;

pub use document::DocumentStore;
