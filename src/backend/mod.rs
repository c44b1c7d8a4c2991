//! Backend Module
//!
//! This module contains all server-side code for the SpeechCoach backend.
//! It provides an Axum HTTP server relaying chat messages to a completion
//! service and managing the connection/messaging layer.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`store`** - Store ports plus PostgreSQL and in-memory backends
//! - **`connections`** - Connection registry and its handlers
//! - **`messaging`** - Threaded message log and its handlers
//! - **`chat`** - Completion client and the chat relay handler
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! Each request is handled statelessly; the only shared state is the
//! `AppState` container holding the two store-backed facades and the
//! completion client, all cheaply cloneable via `Arc`.

pub mod chat;
pub mod connections;
pub mod error;
pub mod messaging;
pub mod routes;
pub mod server;
pub mod store;
