//! Configuration module for harvesting runs
//!
//! This module is organized into focused submodules:
//! - `types`: The `HarvestConfig` struct, defaults, and file loading
//! - `builder`: Type-safe builder with compile-time required fields
//! - `getters`: Read accessors for configuration values

mod builder;
mod getters;
mod types;

pub use builder::{HarvestConfigBuilder, WithOutputDir};
pub use types::HarvestConfig;
