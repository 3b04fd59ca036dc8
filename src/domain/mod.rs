// Domain layer: identity/override models and the property store ports.

pub mod model;
pub mod ports;
