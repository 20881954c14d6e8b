//! Mutation provenance.

use serde::{Deserialize, Serialize};

use crate::id::ContextId;

/// Provenance of the last mutation of an entity, also echoed in service
/// call responses.
///
/// `user_id` and `parent_id` are always `null` in this hub: there are no
/// users and no chained calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub id: ContextId,
    pub user_id: Option<String>,
    pub parent_id: Option<String>,
}

impl Context {
    /// Anonymous, top-level context with the given id.
    #[must_use]
    pub fn new(id: ContextId) -> Self {
        Self {
            id,
            user_id: None,
            parent_id: None,
        }
    }
}
