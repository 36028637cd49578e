//! Ownership of spawned effect handles.
use hashbrown::HashSet;
use log::debug;

use super::EffectHost;

/// Set of effect handles an owner is responsible for destroying.
///
/// Every tracked handle leaves the ledger exactly once, through either
/// [`Self::release`] or [`Self::release_all`]. A handle the host already
/// destroyed is dropped from the ledger without a second destroy call.
/// A ledger is the sole owner of its handles and cannot be cloned.
#[derive(Debug)]
pub struct EffectLedger<H> {
    handles: HashSet<H>,
}

impl<H> Default for EffectLedger<H> {
    fn default() -> Self {
        Self {
            handles: HashSet::new(),
        }
    }
}

impl<H: Copy + Eq + std::hash::Hash + std::fmt::Debug> EffectLedger<H> {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `handle`. Returns `false` if it was already tracked.
    pub fn track(&mut self, handle: H) -> bool {
        self.handles.insert(handle)
    }

    /// Returns `true` while `handle` is tracked.
    #[must_use]
    pub fn contains(&self, handle: H) -> bool {
        self.handles.contains(&handle)
    }

    /// Number of tracked handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` when nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Stops tracking `handle` and destroys it if the host still has it.
    ///
    /// Returns `false` when the handle was not tracked; nothing is destroyed
    /// in that case.
    pub fn release<T, X>(&mut self, handle: H, host: &mut X) -> bool
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        if !self.handles.remove(&handle) {
            return false;
        }
        if host.effect_exists(handle) {
            host.destroy_effect(handle);
        } else {
            debug!("effect {handle:?} already removed by host");
        }
        true
    }

    /// Releases every tracked handle and returns how many were tracked.
    pub fn release_all<T, X>(&mut self, host: &mut X) -> usize
    where
        X: EffectHost<T, Handle = H> + ?Sized,
    {
        let handles: Vec<H> = self.handles.drain().collect();
        for &handle in &handles {
            if host.effect_exists(handle) {
                host.destroy_effect(handle);
            }
        }
        handles.len()
    }
}
