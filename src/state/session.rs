//! Identity obtained from the authentication backend

use serde::{Deserialize, Serialize};

/// Opaque user identity issued by the authentication collaborator.
///
/// Read-only from this crate's perspective; the backend owns its
/// lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "profileURL")]
    pub profile_url: Option<String>,
}
