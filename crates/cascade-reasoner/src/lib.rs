//! # cascade-reasoner
//!
//! Adapter around the external reasoning service. The HTTP client is
//! optional and failure-tolerant by construction: transient errors retry
//! with bounded backoff, malformed responses are salvaged by heuristic
//! extraction, and when everything fails (or the service is disabled) a
//! deterministic template narrates the numeric prediction instead. Callers
//! always get a narration; they never block indefinitely and never see a
//! malformed-response error.

pub mod extract;
pub mod fallback;
pub mod http;
pub mod retry;
pub mod service;

pub use http::HttpReasoner;
pub use service::{Narration, ReasonerService};
