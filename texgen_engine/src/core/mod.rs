pub mod error;
pub mod macros;
pub mod targets;
pub mod types;
