pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::memory::MemoryPropertyStore;
pub use crate::config::HarnessSettings;
pub use crate::core::engine::{vendor_load_properties, OverrideEngine};
pub use crate::domain::model::{OverrideReport, PropertyNamespace};
pub use crate::domain::ports::{PropertyArea, PropertyStore};
pub use crate::utils::error::{OverrideError, Result};
