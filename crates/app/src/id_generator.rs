//! In-process [`IdGenerator`] implementations.

use std::sync::atomic::{AtomicUsize, Ordering};

use hamock_domain::id::ContextId;

use crate::ports::IdGenerator;

/// Random UUID v4 ids. Used by the daemon.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> ContextId {
        ContextId::random()
    }
}

/// Deterministic ids `test-uuid-0`, `test-uuid-1`, …
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicUsize,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ContextId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        ContextId::from(format!("test-uuid-{n}"))
    }
}

/// Always returns the same id.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(ContextId);

impl FixedIdGenerator {
    #[must_use]
    pub fn new(id: impl Into<ContextId>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> ContextId {
        self.0.clone()
    }
}
