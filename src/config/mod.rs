//! Configuration module for batch link fetching
//!
//! This module provides the `FetchConfig` struct and its builder for
//! configuring a run with validation and defaults from `utils::constants`.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::FetchConfigBuilder;
pub use types::FetchConfig;
