// Adapters layer: concrete property store implementations.

pub mod build_prop;
pub mod memory;
