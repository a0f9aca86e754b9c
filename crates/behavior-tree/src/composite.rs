//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the building blocks the tree builder can open:
//! [`Sequence`] (AND logic), [`Selector`] (OR logic), [`Parallel`]
//! (threshold voting) and [`Repeater`] (counted sequence).

use crate::{Behavior, Composite, Node, Status};

/// Executes child behaviors in sequence until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child on the next tick
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates an empty sequence. Children are added with
    /// [`Composite::add_child`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }
}

impl<C> Default for Sequence<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Success => self.current += 1, // Move to next child
                Status::Failure => {
                    self.current = 0;
                    return Status::Failure; // Short-circuit
                }
                Status::Running => return Status::Running, // Resume here next tick
            }
        }
        // All children succeeded
        self.current = 0;
        Status::Success
    }

    fn reset(&mut self) {
        self.current = 0;
        self.children.iter_mut().for_each(Node::reset);
    }

    fn name(&self) -> &'static str {
        "sequence"
    }
}

impl<C> Composite<C> for Sequence<C> {
    fn add_child(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

/// Executes child behaviors in sequence until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If a child returns `Running`, the selector returns `Running` and resumes
///   at that child on the next tick
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Selector<C> {
    /// Creates an empty selector.
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    pub fn with_children(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            current: 0,
        }
    }
}

impl<C> Default for Selector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                Status::Success => {
                    self.current = 0;
                    return Status::Success; // Short-circuit
                }
                Status::Failure => self.current += 1, // Try next child
                Status::Running => return Status::Running,
            }
        }
        // All children failed
        self.current = 0;
        Status::Failure
    }

    fn reset(&mut self) {
        self.current = 0;
        self.children.iter_mut().for_each(Node::reset);
    }

    fn name(&self) -> &'static str {
        "selector"
    }
}

impl<C> Composite<C> for Selector<C> {
    fn add_child(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

/// Evaluates every child on each tick and decides by vote.
///
/// # Semantics
///
/// Children run one after another inside the same synchronous tick. After the
/// pass:
/// - `Success` once at least `required_to_succeed` children succeeded
/// - `Failure` once at least `required_to_fail` children failed
/// - `Failure` if every child finished without reaching either threshold
/// - `Running` otherwise
///
/// A threshold of zero disables that outcome. On a terminal result, children
/// still running are reset.
pub struct Parallel<C> {
    children: Vec<Node<C>>,
    required_to_fail: usize,
    required_to_succeed: usize,
}

impl<C> Parallel<C> {
    pub fn new(required_to_fail: usize, required_to_succeed: usize) -> Self {
        Self {
            children: Vec::new(),
            required_to_fail,
            required_to_succeed,
        }
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let (mut succeeded, mut failed) = (0, 0);
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => succeeded += 1,
                Status::Failure => failed += 1,
                Status::Running => {}
            }
        }

        let status = if self.required_to_succeed > 0 && succeeded >= self.required_to_succeed {
            Status::Success
        } else if self.required_to_fail > 0 && failed >= self.required_to_fail {
            Status::Failure
        } else if succeeded + failed == self.children.len() {
            Status::Failure
        } else {
            Status::Running
        };

        if status.is_terminal() {
            self.reset();
        }
        status
    }

    fn reset(&mut self) {
        self.children.iter_mut().for_each(Node::reset);
    }

    fn name(&self) -> &'static str {
        "parallel"
    }
}

impl<C> Composite<C> for Parallel<C> {
    fn add_child(&mut self, child: Node<C>) {
        self.children.push(child);
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }
}

/// Runs its children as a sequence a fixed number of times.
///
/// # Semantics
///
/// - Each completed pass increments an internal counter and returns `Running`
///   until `times` passes have succeeded, then returns `Success`
/// - A `Running` child returns `Running` and resumes on the next tick
/// - A failing child returns `Failure` and rewinds the counter
pub struct Repeater<C> {
    pass: Sequence<C>,
    times: u32,
    completed: u32,
}

impl<C> Repeater<C> {
    /// Creates a repeater. `times` is clamped to at least one pass.
    pub fn new(times: u32) -> Self {
        Self {
            pass: Sequence::new(),
            times: times.max(1),
            completed: 0,
        }
    }

    /// Passes finished since the last terminal result.
    pub fn completed(&self) -> u32 {
        self.completed
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.pass.tick(ctx) {
            Status::Running => Status::Running,
            Status::Failure => {
                self.completed = 0;
                Status::Failure
            }
            Status::Success => {
                self.completed += 1;
                if self.completed >= self.times {
                    self.completed = 0;
                    Status::Success
                } else {
                    Status::Running
                }
            }
        }
    }

    fn reset(&mut self) {
        self.completed = 0;
        self.pass.reset();
    }

    fn name(&self) -> &'static str {
        "repeater"
    }
}

impl<C> Composite<C> for Repeater<C> {
    fn add_child(&mut self, child: Node<C>) {
        self.pass.add_child(child);
    }

    fn children(&self) -> &[Node<C>] {
        self.pass.children()
    }
}
