pub mod error;
pub mod files;
pub mod logger;
pub mod validation;
