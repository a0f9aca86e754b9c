//! Core behavior traits.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and the two parent capabilities
//! layered on it: [`Composite`] (many ordered children) and [`Decorator`]
//! (at most one child). The traits are generic over a context type `C`, the
//! caller's blackboard, which is threaded unchanged to every node.

use crate::{Node, Status};

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this behavior node against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard. Nodes can read
    ///   caller state and modify it (e.g., to store intermediate results).
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs another tick to finish
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Clears node-local progress (running child index, repeat counter, ...).
    ///
    /// Parents call this on children they abandon mid-run.
    fn reset(&mut self) {}

    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A node that owns an ordered list of children.
///
/// Insertion order is evaluation order.
pub trait Composite<C>: Behavior<C> {
    /// Appends a child after the existing ones.
    fn add_child(&mut self, child: Node<C>);

    /// The children in evaluation order.
    fn children(&self) -> &[Node<C>];
}

/// A node that wraps at most one child and remaps its result.
///
/// Implementations must pass `Status::Running` from the child through
/// unchanged. Masking an in-progress child would make the next tick re-enter
/// the decorator's own logic instead of resuming the child.
pub trait Decorator<C>: Behavior<C> {
    /// Assigns the single child, replacing any previous one.
    fn set_child(&mut self, child: Node<C>);

    /// The wrapped child, if one was assigned.
    fn child(&self) -> Option<&Node<C>>;
}
