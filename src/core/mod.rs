pub mod applier;
pub mod engine;
pub mod identity;
pub mod rules;

pub use crate::domain::model::{IdentitySignals, OverrideReport, Resolution};
pub use crate::domain::ports::{PropertyArea, PropertyStore};
pub use crate::utils::error::Result;
