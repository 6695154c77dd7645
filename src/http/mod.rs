//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client request
//!     → server.rs (Axum setup, CORS, body cap)
//!     → handlers.rs (validate, build action, forward)
//!     → error.rs maps failures to the JSON envelope
//!     → backend reply relayed to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
