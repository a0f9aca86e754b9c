//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`AlwaysFail`], [`AlwaysSucceed`], [`Inverter`] (NOT
//! logic) and [`Conditional`] (guarded execution).
//!
//! Every decorator here passes a `Running` child through untouched and only
//! remaps terminal results.
//!
//! # Panics
//!
//! Ticking a decorator that never received a child panics with
//! [`TreeError::MissingChild`]. Trees assembled through
//! [`TreeBuilder`](crate::TreeBuilder) or [`Tree::new`](crate::Tree::new) are
//! validated up front and cannot reach that state.

use crate::{Behavior, Decorator, Node, Status, TreeError};

fn tick_child<C>(owner: &'static str, child: &mut Option<Node<C>>, ctx: &mut C) -> Status {
    match child {
        Some(child) => child.tick(ctx),
        None => panic!("{}", TreeError::MissingChild { node: owner }),
    }
}

/// Forces a terminal result to `Failure`.
///
/// # Semantics
///
/// - If the child returns `Running`, returns `Running`
/// - If the child returns `Success`, **returns `Failure`**
/// - If the child returns `Failure`, returns `Failure`
///
/// Useful for running a subtree for its side effects inside a selector
/// without letting it end the selector.
pub struct AlwaysFail<C> {
    child: Option<Node<C>>,
}

impl<C> AlwaysFail<C> {
    /// Creates a decorator with an empty child slot.
    pub fn new() -> Self {
        Self { child: None }
    }

    pub fn with_child(child: Node<C>) -> Self {
        Self { child: Some(child) }
    }
}

impl<C> Default for AlwaysFail<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for AlwaysFail<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match tick_child("always_fail", &mut self.child, ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Failure,
        }
    }

    fn reset(&mut self) {
        if let Some(child) = &mut self.child {
            child.reset();
        }
    }

    fn name(&self) -> &'static str {
        "always_fail"
    }
}

impl<C> Decorator<C> for AlwaysFail<C> {
    fn set_child(&mut self, child: Node<C>) {
        self.child = Some(child);
    }

    fn child(&self) -> Option<&Node<C>> {
        self.child.as_ref()
    }
}

/// Always returns `Success` once the child finishes, regardless of the result.
///
/// # Semantics
///
/// - If the child returns `Running`, returns `Running`
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed<C> {
    child: Option<Node<C>>,
}

impl<C> AlwaysSucceed<C> {
    pub fn new() -> Self {
        Self { child: None }
    }

    pub fn with_child(child: Node<C>) -> Self {
        Self { child: Some(child) }
    }
}

impl<C> Default for AlwaysSucceed<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match tick_child("always_succeed", &mut self.child, ctx) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        }
    }

    fn reset(&mut self) {
        if let Some(child) = &mut self.child {
            child.reset();
        }
    }

    fn name(&self) -> &'static str {
        "always_succeed"
    }
}

impl<C> Decorator<C> for AlwaysSucceed<C> {
    fn set_child(&mut self, child: Node<C>) {
        self.child = Some(child);
    }

    fn child(&self) -> Option<&Node<C>> {
        self.child.as_ref()
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Option<Node<C>>,
}

impl<C> Inverter<C> {
    pub fn new() -> Self {
        Self { child: None }
    }

    pub fn with_child(child: Node<C>) -> Self {
        Self { child: Some(child) }
    }
}

impl<C> Default for Inverter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        tick_child("inverter", &mut self.child, ctx).invert()
    }

    fn reset(&mut self) {
        if let Some(child) = &mut self.child {
            child.reset();
        }
    }

    fn name(&self) -> &'static str {
        "inverter"
    }
}

impl<C> Decorator<C> for Inverter<C> {
    fn set_child(&mut self, child: Node<C>) {
        self.child = Some(child);
    }

    fn child(&self) -> Option<&Node<C>> {
        self.child.as_ref()
    }
}

/// Runs its child only while a predicate on the context holds.
///
/// # Semantics
///
/// - If the predicate is false, returns `Failure` without ticking the child
/// - If the predicate is true, returns whatever the child returns
/// - While the child is `Running`, later ticks resume the child directly and
///   do **not** re-check the predicate
pub struct Conditional<C, P> {
    predicate: P,
    child: Option<Node<C>>,
    child_running: bool,
}

impl<C, P> Conditional<C, P>
where
    P: Fn(&C) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            child: None,
            child_running: false,
        }
    }
}

impl<C, P> Behavior<C> for Conditional<C, P>
where
    P: Fn(&C) -> bool + Send + Sync,
{
    fn tick(&mut self, ctx: &mut C) -> Status {
        if !self.child_running && !(self.predicate)(ctx) {
            return Status::Failure;
        }
        let status = tick_child("conditional", &mut self.child, ctx);
        self.child_running = status.is_running();
        status
    }

    fn reset(&mut self) {
        self.child_running = false;
        if let Some(child) = &mut self.child {
            child.reset();
        }
    }

    fn name(&self) -> &'static str {
        "conditional"
    }
}

impl<C, P> Decorator<C> for Conditional<C, P>
where
    P: Fn(&C) -> bool + Send + Sync,
{
    fn set_child(&mut self, child: Node<C>) {
        self.child = Some(child);
    }

    fn child(&self) -> Option<&Node<C>> {
        self.child.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Condition, Fail, Succeed, Wait};

    struct TestContext {
        value: i32,
    }

    struct IsPositive;
    impl Behavior<TestContext> for IsPositive {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            if ctx.value > 0 {
                Status::Success
            } else {
                Status::Failure
            }
        }
    }

    struct FailAndIncrement;
    impl Behavior<TestContext> for FailAndIncrement {
        fn tick(&mut self, ctx: &mut TestContext) -> Status {
            ctx.value += 1;
            Status::Failure
        }
    }

    struct Pending;
    impl Behavior<TestContext> for Pending {
        fn tick(&mut self, _ctx: &mut TestContext) -> Status {
            Status::Running
        }
    }

    #[test]
    fn always_fail_remaps_terminal_results() {
        let mut ctx = TestContext { value: 0 };

        let mut on_success = AlwaysFail::with_child(Node::leaf(Succeed));
        assert_eq!(on_success.tick(&mut ctx), Status::Failure);

        let mut on_failure = AlwaysFail::with_child(Node::leaf(Fail));
        assert_eq!(on_failure.tick(&mut ctx), Status::Failure);

        let mut on_running = AlwaysFail::with_child(Node::leaf(Pending));
        assert_eq!(on_running.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn inverter_inverts_success() {
        let mut inverter = Inverter::with_child(Node::leaf(IsPositive));

        let mut ctx = TestContext { value: 10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn inverter_inverts_failure() {
        let mut inverter = Inverter::with_child(Node::leaf(IsPositive));

        let mut ctx = TestContext { value: -10 };
        assert_eq!(inverter.tick(&mut ctx), Status::Success);
    }

    #[test]
    fn inverter_passes_running_through() {
        let mut inverter = Inverter::with_child(Node::leaf(Pending));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(inverter.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn always_succeed_on_failure() {
        let mut always = AlwaysSucceed::with_child(Node::leaf(FailAndIncrement));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(always.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1); // Child still executed
    }

    #[test]
    fn always_succeed_passes_running_through() {
        let mut always = AlwaysSucceed::with_child(Node::leaf(Pending));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(always.tick(&mut ctx), Status::Running);
    }

    #[test]
    fn conditional_blocks_child_when_false() {
        let mut guarded = Conditional::new(|ctx: &TestContext| ctx.value > 0);
        guarded.set_child(Node::leaf(FailAndIncrement));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(guarded.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.value, 0); // Child never ran
    }

    #[test]
    fn conditional_does_not_recheck_while_running() {
        let mut guarded = Conditional::new(|ctx: &TestContext| ctx.value == 0);
        guarded.set_child(Node::leaf(Wait::new(1)));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(guarded.tick(&mut ctx), Status::Running);

        // Predicate now false, but the running child is resumed
        ctx.value = 5;
        assert_eq!(guarded.tick(&mut ctx), Status::Success);

        // Child finished, so the predicate gates the next run again
        assert_eq!(guarded.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn conditional_forwards_child_result() {
        let mut guarded = Conditional::new(|_: &TestContext| true);
        guarded.set_child(Node::leaf(Condition::new(|ctx: &TestContext| ctx.value == 1)));

        let mut ctx = TestContext { value: 1 };
        assert_eq!(guarded.tick(&mut ctx), Status::Success);
        ctx.value = 2;
        assert_eq!(guarded.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn set_child_replaces_previous() {
        let mut inverter: Inverter<TestContext> = Inverter::new();
        assert!(inverter.child().is_none());

        inverter.set_child(Node::leaf(Succeed));
        inverter.set_child(Node::leaf(Action::new(|ctx: &mut TestContext| {
            ctx.value += 1;
            Status::Failure
        })));

        let mut ctx = TestContext { value: 0 };
        assert_eq!(inverter.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    #[should_panic(expected = "`always_fail` has no child")]
    fn ticking_childless_decorator_panics() {
        let mut empty: AlwaysFail<TestContext> = AlwaysFail::new();
        empty.tick(&mut TestContext { value: 0 });
    }
}
