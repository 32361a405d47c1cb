//! fibindent - Fibonacci indentation for text editors
//!
//! Instead of advancing by a fixed tab width, each indent level climbs a
//! Fibonacci sequence of column widths seeded by the configured tab size
//! (tab size 4: columns 4, 8, 12, 20, 32, ...).
//!
//! Module structure:
//! - engine: pure indent-width computation (the Fibonacci walk)
//! - models: positions, selections, content changes, edit batches
//! - host: narrow ports to the host editor, plus a rope-backed scratch host
//! - coordinator: bridges host events to the engine
//! - workspace: active-editor tracking and command lifecycle
//! - services: configuration port
//! - commands: command identifiers and registry

pub mod commands;
pub mod coordinator;
pub mod engine;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;
pub mod workspace;
