//! Declarative form schemas and validation

mod spec;
mod validate;

pub use spec::*;
pub use validate::*;
