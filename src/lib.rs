//! Stack Overflow Profile Lookup Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod profile;
pub mod upstream;
pub mod validate;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
