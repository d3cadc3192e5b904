//! The allocation gate: who decides whether an operation may build its result.
//!
//! Every constructing operation knows the exact size of its output before it
//! writes a single byte. Before building, it asks the gate for that many
//! bytes; a declined request surfaces as
//! [`StringError::AllocationFailure`](crate::StringError::AllocationFailure)
//! and the operation returns without touching anything. Backing memory still
//! comes from the global allocator (this crate forbids `unsafe`, so it cannot
//! source raw storage itself). The gate is a *meter*, deciding and
//! accounting, not a memory pool.
//!
//! Two gates ship with the crate. [`SystemAlloc`] grants everything and is
//! what [`Slicer::new`](crate::Slicer::new) installs. [`ByteQuota`] enforces
//! a fixed byte budget, which is how allocation failure becomes reachable in
//! tests instead of a code path that only fires when the machine is already
//! dying.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Ask before building**: no operation constructs output bytes it has not
//!   been granted. Scratch storage discarded before return is released back.
//! - **Release what you were granted**: `release(n)` must only be called for
//!   bytes previously granted. `ByteQuota` saturates rather than underflow,
//!   but an over-release still corrupts the accounting.
//! - **Gates are shared**: one gate instance can sit behind several
//!   [`Slicer`](crate::Slicer)s; implementations must be safe to call from
//!   multiple threads (`Send + Sync`).

use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// GATE TRAIT
// =============================================================================

/// Decides whether storage requests are granted.
///
/// The four hooks mirror the classic allocator quartet: plain allocation,
/// zero-initialized array allocation, resize, and free. `allocate` and
/// `release` are the required pair; the other two default to delta
/// accounting on top of them, and a custom gate only overrides them when it
/// wants to treat array or resize traffic differently.
pub trait AllocGate: Send + Sync {
    /// Request leave to hold `bytes` of storage. `true` grants.
    fn allocate(&self, bytes: usize) -> bool;

    /// Request leave to hold `bytes` of zero-initialized array storage.
    fn allocate_zeroed(&self, bytes: usize) -> bool {
        self.allocate(bytes)
    }

    /// Resize a standing reservation from `old` to `new` bytes. `true`
    /// grants; on decline the old reservation stands untouched.
    fn reallocate(&self, old: usize, new: usize) -> bool {
        if new > old {
            self.allocate(new - old)
        } else {
            self.release(old - new);
            true
        }
    }

    /// Hand `bytes` of previously granted storage back.
    fn release(&self, bytes: usize);
}

// =============================================================================
// SYSTEM GATE
// =============================================================================

/// The default gate: grants every request.
///
/// With this gate installed the library behaves like ordinary Rust code:
/// the global allocator is the only limit. `release` is a no-op because
/// there is nothing to account.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAlloc;

impl AllocGate for SystemAlloc {
    #[inline]
    fn allocate(&self, _bytes: usize) -> bool {
        true
    }

    #[inline]
    fn release(&self, _bytes: usize) {}
}

// =============================================================================
// QUOTA GATE
// =============================================================================

/// A gate with a fixed byte budget.
///
/// Grants are charged against the budget and releases are credited back, so
/// `used()` tracks live granted bytes. A request that would push `used()`
/// past the limit is declined and changes nothing. The counter is atomic;
/// one quota can back slicers on several threads.
///
/// ```
/// use culter::{ByteQuota, Slicer, StringError};
/// use std::sync::Arc;
///
/// let quota = Arc::new(ByteQuota::new(4));
/// let slicer = Slicer::with_gate(quota.clone());
/// let hi = slicer.copy(&"hi".into()).unwrap();
/// assert_eq!(quota.used(), 2);
/// assert_eq!(
///     slicer.copy(&"too long".into()),
///     Err(StringError::AllocationFailure { requested: 8 })
/// );
/// drop(hi);
/// ```
#[derive(Debug)]
pub struct ByteQuota {
    limit: usize,
    used: AtomicUsize,
}

impl ByteQuota {
    /// A quota that will grant at most `limit` live bytes.
    pub fn new(limit: usize) -> Self {
        ByteQuota {
            limit,
            used: AtomicUsize::new(0),
        }
    }

    /// The configured budget.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes currently granted and not yet released.
    #[inline]
    pub fn used(&self) -> usize {
        self.used.load(Ordering::Relaxed)
    }

    /// Bytes still available before the budget is exhausted.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used())
    }
}

impl AllocGate for ByteQuota {
    fn allocate(&self, bytes: usize) -> bool {
        // Compare-and-swap loop; overflow of the counter itself is declined
        // the same way as exceeding the budget.
        self.used
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |used| {
                used.checked_add(bytes).filter(|&n| n <= self.limit)
            })
            .is_ok()
    }

    fn release(&self, bytes: usize) {
        let _ = self
            .used
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |used| {
                Some(used.saturating_sub(bytes))
            });
    }
}
