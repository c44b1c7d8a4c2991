//! Server Module
//!
//! Server initialization, configuration loading and application state.
//!
//! - **`config`** - Environment-driven configuration and database loading
//! - **`init`** - Application assembly (`create_app`)
//! - **`state`** - `AppState` and its `FromRef` extractions

pub mod config;
pub mod init;
pub mod state;
