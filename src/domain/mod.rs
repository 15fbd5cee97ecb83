pub mod error;
pub mod model;
pub mod replacements;
pub mod validation;
