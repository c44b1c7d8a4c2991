//! Backend Error Module
//!
//! Error types for the HTTP surface. Every failing operation maps to a fixed
//! human-readable message and a 500 response; nothing is retried and no
//! partial result is reported.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```

pub mod conversion;
pub mod types;

pub use types::BackendError;
