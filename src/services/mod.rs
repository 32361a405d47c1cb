//! Host-facing service ports.

pub mod config;

pub use config::IndentConfig;
