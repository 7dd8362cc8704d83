//! Live form state module

mod field;
mod form_state;
mod session;

pub use field::*;
pub use form_state::*;
pub use session::*;
