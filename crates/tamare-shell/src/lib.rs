//! tamare-shell library root.
//!
//! Re-exports the shell modules so integration tests can drive screens,
//! the dashboard, and commands without going through the CLI.

pub mod commands;
pub mod config;
pub mod dashboard;
pub mod screens;
pub mod state;
