//! Chart aggregate: pie options, theme, load state and label formatting.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
