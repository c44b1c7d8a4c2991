//! SpeechCoach - Main Library
//!
//! SpeechCoach is the backend service for a speech-coaching application.
//! It relays chat messages to a language-model completion service and
//! manages a lightweight client/therapist connection and messaging layer.
//!
//! # Overview
//!
//! This library provides:
//! - Connection lifecycle management (request -> pending record)
//! - Threaded messaging with canonical, direction-independent thread addressing
//! - A chat relay to an OpenAI-compatible completion endpoint
//! - An Axum HTTP server exposing the above
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Wire-format types (connections, messages, chat DTOs)
//! - **`backend`** - Server-side code
//!   - Axum HTTP server setup, routes and handlers
//!   - Store ports with PostgreSQL and in-memory backends
//!   - The connection registry and threaded message log
//!   - Completion client for the language-model relay
//!
//! # Usage
//!
//! ```rust,no_run
//! use speechcoach::backend::server::config::ServerConfig;
//! use speechcoach::backend::server::init::create_app;
//!
//! # async fn example() {
//! let config = ServerConfig::from_env();
//! let app = create_app(config).await;
//! // Use app with an Axum server
//! # }
//! ```

pub mod backend;
pub mod shared;
