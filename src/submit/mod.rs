//! Submission orchestration: validate, call out, dispatch the outcome

mod controller;
mod outcome;

pub use controller::*;
pub use outcome::*;
