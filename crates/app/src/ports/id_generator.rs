//! Id generator port: where context ids come from.

use std::sync::Arc;

use hamock_domain::id::ContextId;

/// Mints a fresh [`ContextId`] for every accepted service call.
pub trait IdGenerator {
    /// Return the next identifier.
    fn next_id(&self) -> ContextId;
}

impl<T: IdGenerator> IdGenerator for Arc<T> {
    fn next_id(&self) -> ContextId {
        (**self).next_id()
    }
}
