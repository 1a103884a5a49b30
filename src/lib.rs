pub mod config;
pub mod error;
pub mod handlers;
pub mod mcp;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;
