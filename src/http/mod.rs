//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (attach request ID)
//!     → handlers.rs (validate input, run the lookup pipeline)
//!     → error.rs (map failures to status codes and JSON bodies)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
