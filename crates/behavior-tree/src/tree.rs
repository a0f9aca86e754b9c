//! Runtime holder for a built behavior tree.
//!
//! [`Tree`] owns the caller's context and the root node, and throttles how
//! often the root is evaluated. The caller drives it from its own loop by
//! passing the time elapsed since the previous call:
//!
//! ```rust,ignore
//! loop {
//!     let delta = frame_clock.tick();
//!     if let Some(status) = tree.tick(delta) {
//!         // the agent made a decision this frame
//!     }
//! }
//! ```

use std::time::Duration;

use crate::{Behavior, Node, Status, TreeError};

/// A validated behavior tree plus its context and evaluation throttle.
///
/// # Throttling
///
/// Every [`tick`](Tree::tick) adds its delta to an accumulator. The root is
/// evaluated only once the accumulator reaches the minimum interval, and the
/// accumulator then restarts from zero. The accumulator starts *at* the
/// interval, so the first tick always evaluates.
pub struct Tree<C> {
    context: C,
    root: Node<C>,
    min_interval: Duration,
    elapsed: Duration,
}

impl<C> Tree<C> {
    /// Wraps `root` after checking that every decorator and composite in it
    /// has children.
    pub fn new(context: C, root: Node<C>, min_interval: Duration) -> Result<Self, TreeError> {
        root.validate()?;
        Ok(Self {
            context,
            root,
            min_interval,
            elapsed: min_interval,
        })
    }

    /// Advances the throttle by `delta` and evaluates the root if due.
    ///
    /// Returns `None` when the root was not evaluated during this call.
    pub fn tick(&mut self, delta: Duration) -> Option<Status> {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed < self.min_interval {
            tracing::trace!(
                "skipping evaluation ({:?} of {:?} elapsed)",
                self.elapsed,
                self.min_interval
            );
            return None;
        }
        Some(self.evaluate())
    }

    /// Evaluates the root now, regardless of the throttle, and restarts the
    /// accumulator.
    pub fn evaluate(&mut self) -> Status {
        self.elapsed = Duration::ZERO;
        let status = self.root.tick(&mut self.context);
        tracing::trace!("{} -> {:?}", self.root.name(), status);
        status
    }

    /// Clears progress held by every node (running children, counters).
    pub fn reset(&mut self) {
        self.root.reset();
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time accumulated since the last evaluation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Takes the root out, e.g. to splice it into another builder as a
    /// subtree. The context is dropped.
    pub fn into_root(self) -> Node<C> {
        self.root
    }

    /// Takes the context out, dropping the nodes.
    pub fn into_context(self) -> C {
        self.context
    }
}
