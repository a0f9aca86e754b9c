//! Leaf behavior nodes.
//!
//! Leaves never hold children. The builder attaches them to whichever frame is
//! currently open. This module provides closure-backed [`Action`] and
//! [`Condition`] nodes, plus a few fixed leaves ([`Log`], [`Wait`],
//! [`Succeed`], [`Fail`]).

use std::borrow::Cow;

use crate::{Behavior, Status};

/// Runs a closure against the context and returns its status.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let mut count = Action::new(|n: &mut u32| {
///     *n += 1;
///     Status::Success
/// });
///
/// let mut n = 0;
/// assert_eq!(count.tick(&mut n), Status::Success);
/// assert_eq!(n, 1);
/// ```
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status + Send + Sync,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }

    fn name(&self) -> &'static str {
        "action"
    }
}

/// Tests a predicate against the context.
///
/// Returns `Success` when the predicate holds, `Failure` otherwise. Never
/// returns `Running`.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send + Sync,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        if (self.check)(ctx) {
            Status::Success
        } else {
            Status::Failure
        }
    }

    fn name(&self) -> &'static str {
        "condition"
    }
}

/// Emits an `info` event and succeeds.
pub struct Log {
    message: Cow<'static, str>,
}

impl Log {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<C> Behavior<C> for Log {
    fn tick(&mut self, _ctx: &mut C) -> Status {
        tracing::info!(target: "behavior_tree", "{}", self.message);
        Status::Success
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Reports `Running` for a fixed number of evaluations, then `Success`.
///
/// The count is in evaluations, not seconds. After succeeding the node
/// rewinds, so the next evaluation starts a fresh wait.
pub struct Wait {
    ticks: u32,
    waited: u32,
}

impl Wait {
    pub fn new(ticks: u32) -> Self {
        Self { ticks, waited: 0 }
    }
}

impl<C> Behavior<C> for Wait {
    fn tick(&mut self, _ctx: &mut C) -> Status {
        if self.waited < self.ticks {
            self.waited += 1;
            Status::Running
        } else {
            self.waited = 0;
            Status::Success
        }
    }

    fn reset(&mut self) {
        self.waited = 0;
    }

    fn name(&self) -> &'static str {
        "wait"
    }
}

/// Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Succeed;

impl<C> Behavior<C> for Succeed {
    fn tick(&mut self, _ctx: &mut C) -> Status {
        Status::Success
    }

    fn name(&self) -> &'static str {
        "succeed"
    }
}

/// Always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fail;

impl<C> Behavior<C> for Fail {
    fn tick(&mut self, _ctx: &mut C) -> Status {
        Status::Failure
    }

    fn name(&self) -> &'static str {
        "fail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    #[test]
    fn action_mutates_context() {
        let mut action = Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Running
        });

        let mut ctx = TestContext { value: 0 };
        assert_eq!(action.tick(&mut ctx), Status::Running);
        assert_eq!(action.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.value, 2);
    }

    #[test]
    fn condition_maps_predicate() {
        let mut positive = Condition::new(|ctx: &TestContext| ctx.value > 0);

        assert_eq!(positive.tick(&mut TestContext { value: 3 }), Status::Success);
        assert_eq!(positive.tick(&mut TestContext { value: -3 }), Status::Failure);
    }

    #[test]
    fn wait_runs_then_succeeds_and_rewinds() {
        let mut wait = Wait::new(2);
        let mut ctx = ();

        assert_eq!(wait.tick(&mut ctx), Status::Running);
        assert_eq!(wait.tick(&mut ctx), Status::Running);
        assert_eq!(wait.tick(&mut ctx), Status::Success);
        assert_eq!(wait.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn wait_reset_restarts_count() {
        let mut wait = Wait::new(1);
        let mut ctx = ();

        assert_eq!(wait.tick(&mut ctx), Status::Running);
        Behavior::<()>::reset(&mut wait);
        assert_eq!(wait.tick(&mut ctx), Status::Running);
        assert_eq!(wait.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn zero_wait_succeeds_immediately() {
        let mut wait = Wait::new(0);
        assert_eq!(wait.tick(&mut ()), Status::Success);
    }

    #[test]
    fn log_succeeds() {
        let mut log = Log::new("checkpoint");
        assert_eq!(log.tick(&mut ()), Status::Success);
    }
}
