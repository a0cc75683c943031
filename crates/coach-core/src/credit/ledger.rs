use std::sync::atomic::{AtomicU32, Ordering};

use super::tier::Tier;
use crate::error::{CoachError, Result};

/// Remaining AI credits for a user.
///
/// A ledger may be shared by several conversations behind an `Arc`. The
/// decrement is a single compare-and-swap so concurrent conversations can
/// never drive `remaining` below zero, and `remaining <= capacity` holds at
/// every observable point.
#[derive(Debug)]
pub struct CreditLedger {
    remaining: AtomicU32,
    capacity: u32,
}

impl CreditLedger {
    /// Creates a full ledger. A zero capacity is rejected.
    pub fn new(capacity: u32) -> Result<Self> {
        Self::with_remaining(capacity, capacity)
    }

    /// Creates a ledger that has already been partly spent.
    ///
    /// `remaining` is clamped to `capacity`.
    pub fn with_remaining(capacity: u32, remaining: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(CoachError::config("credit capacity must be positive"));
        }
        Ok(Self {
            remaining: AtomicU32::new(remaining.min(capacity)),
            capacity,
        })
    }

    pub fn for_tier(tier: Tier) -> Self {
        Self {
            remaining: AtomicU32::new(tier.credits()),
            capacity: tier.credits(),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Spends one credit if any is left.
    ///
    /// Returns `false` and changes nothing when the ledger is empty.
    pub fn try_decrement(&self) -> bool {
        self.remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(1)
            })
            .is_ok()
    }

    /// Refills the ledger to capacity. Called at the start of a billing cycle.
    pub fn reset(&self) {
        self.remaining.store(self.capacity, Ordering::Release);
        tracing::debug!(capacity = self.capacity, "credit ledger reset");
    }
}
