//! Prep client core - form pipeline for the Prep interview practice app
//!
//! Schema-validated forms submitted to the Prep backend: credential
//! sign-in/sign-up and interview question generation. Validation,
//! payload construction, the outbound call, and the resulting
//! notification + navigation all run through [`submit::SubmissionController`].

pub mod config;
pub mod forms;
pub mod schema;
pub mod service;
pub mod state;
pub mod submit;

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr, filtered by `RUST_LOG`.
///
/// Call once per process, before constructing clients. A second call is
/// a no-op.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prep_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
