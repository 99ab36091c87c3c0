//! Decoupling of visual zoom from rendered resolution.
//!
//! Changing the real layout size of the packaging is expensive, scaling it
//! with a transform is cheap but blurry. [`ScaleCommitManager`] returns the
//! transform ratio that makes the visible size match the requested zoom right
//! away, and commits a new resolution once the zoom has been stable for
//! [`COMMIT_DELAY`].

use crate::constants::{COMMIT_DEAD_ZONE, COMMIT_DELAY, MAX_RENDER_SCALE};
use instant::Instant;
use std::rc::Rc;

/// Time source for the debounce window.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Clone, Copy, Debug)]
struct PendingCommit {
    target: f64,
    due: Instant,
}

#[derive(Debug)]
pub struct ScaleCommitManager<C: Clock> {
    clock: C,
    committed_scale: f64,
    pending: Option<PendingCommit>,
}

impl<C: Clock> ScaleCommitManager<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            committed_scale: 1.0,
            pending: None,
        }
    }

    /// Resolution the object is currently laid out at.
    #[inline]
    pub fn committed_scale(&self) -> f64 {
        self.committed_scale
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Transform ratio for `target_scale` that also (re)arms the trailing
    /// commit. Any previously pending commit is superseded.
    pub fn visual_scale(&mut self, target_scale: f64) -> f64 {
        self.pending = Some(PendingCommit {
            target: target_scale,
            due: self.clock.now() + COMMIT_DELAY,
        });
        self.ratio(target_scale)
    }

    /// Transform ratio for `target_scale` against the committed resolution.
    #[inline]
    pub fn ratio(&self, target_scale: f64) -> f64 {
        target_scale / self.committed_scale
    }

    /// Fire the pending commit if its window has elapsed. Returns the new
    /// committed scale when the resolution actually changed.
    pub fn poll(&mut self) -> Option<f64> {
        let pending = self.pending?;
        if self.clock.now() < pending.due {
            return None;
        }
        self.pending = None;

        if (self.committed_scale - pending.target).abs() <= COMMIT_DEAD_ZONE {
            return None;
        }
        let next = pending.target.min(MAX_RENDER_SCALE);
        if next == self.committed_scale {
            return None;
        }
        log::info!(
            "[resolution] commit {:.2} -> {:.2} (target {:.2})",
            self.committed_scale,
            next,
            pending.target
        );
        self.committed_scale = next;
        Some(next)
    }
}
