//! KPI Indicator Gateway
//!
//! A thin HTTP gateway between a web client and a remote spreadsheet-backed
//! scripting backend.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request        ┌──────────────────────────────────────────┐
//!   ─────────────────────▶│  http/server ──▶ http/handlers           │
//!                         │                     │                    │
//!                         │        validate (kpi/validator, upload)  │
//!                         │                     │                    │
//!                         │                     ▼                    │
//!   Client Response       │  error (envelope) ◀─┤  backend/client ───┼──▶ Scripting
//!   ◀─────────────────────│                     └──── one POST ──────│    Backend
//!                         │  config: listener / backend / cors /     │
//!                         │          upload caps                     │
//!                         └──────────────────────────────────────────┘
//! ```
//!
//! Each request is handled statelessly: light validation, at most one master
//! data fetch, exactly one forwarded call, and the backend's JSON body is
//! relayed unchanged.

// Core subsystems
pub mod backend;
pub mod config;
pub mod error;
pub mod http;

// Domain logic
pub mod kpi;
pub mod upload;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpServer;
