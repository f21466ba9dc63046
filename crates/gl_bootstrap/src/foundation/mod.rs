//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Console logging setup
//! - The flat debug log file sink

pub mod logging;
