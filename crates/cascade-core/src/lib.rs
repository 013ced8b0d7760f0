//! # cascade-core
//!
//! Foundation crate for the cascade alert fusion engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod alert;
pub mod confidence;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod topology;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use alert::{Alert, RawAlert, Severity};
pub use confidence::Confidence;
pub use config::CascadeConfig;
pub use errors::{CascadeError, CascadeResult};
pub use topology::ClientTopology;
