// This crate contains everything needed to talk to the remote activity API:
// - HTTP client for the activity endpoints
// - The opaque activity value passed through to rendering
// - Client configuration
// - Shared error classification

// Export client module - HTTP client for the activity endpoints
pub mod client;
pub use client::*;

// Export types module - Activity data passed through to rendering
pub mod types;
pub use types::*;

// Export config module - Client configuration
pub mod config;
pub use config::*;

// Export errors module - Shared error classification
pub mod errors;
pub use errors::*;
