//! HTTP gateway for QuitPal.
//!
//! Exposes the session over three JSON routes — `POST /initialize`,
//! `POST /chat`, and `GET /health` — with permissive CORS for the browser
//! frontend and input sanitization ahead of the engine. Engine-internal
//! failures never surface as protocol errors; only malformed payloads do.

/// Input sanitization for inbound chat messages.
pub mod sanitize;
/// Router construction and request handlers.
pub mod server;

pub use sanitize::{SanitizeResult, Sanitizer};
pub use server::GatewayServer;
