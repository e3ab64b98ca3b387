//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence
//! - Database connection parameters

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{DatabaseConfig, Settings};
