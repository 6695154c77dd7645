//! Backend forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! validated request
//!     → action.rs (tagged payload construction)
//!     → client.rs (one POST to the configured endpoint)
//!     → JSON body relayed verbatim to the client
//! ```

pub mod action;
pub mod client;

pub use action::BackendAction;
pub use client::BackendClient;
