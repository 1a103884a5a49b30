//! HTTP handlers for the izahname service.

pub mod app;
pub mod ask;
pub mod health;
pub mod metrics;
