//! # Core Module
//!
//! Shared abstractions used by the other subsystems.
//!
//! ## Organization
//!
//! - **Config**: Configuration for the window, GL context, debug log and frame loop

pub mod config;
