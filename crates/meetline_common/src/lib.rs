// --- File: crates/meetline_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared domain models
pub mod services; // Collaborator trait contracts

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, internal_error, not_found, validation_error, Context, HttpStatusCode,
    MeetlineError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
