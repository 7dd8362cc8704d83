//! Concrete form instances: credential form and interview-parameters form

mod auth;
mod interview;

pub use auth::*;
pub use interview::*;
