//! Owned node handle with an explicit capability tag.
//!
//! A built tree is a graph of [`Node`] values. The variant records what a node
//! can hold, so structure can be inspected and validated without asking the
//! boxed value what type it is.

use core::slice;

use crate::{Behavior, Composite, Decorator, Status, TreeError};

/// A behavior tree node tagged by capability.
pub enum Node<C> {
    /// Terminal node (action, condition, ...). Never holds children.
    Leaf(Box<dyn Behavior<C>>),
    /// Multi-child container.
    Composite(Box<dyn Composite<C>>),
    /// Single-child wrapper.
    Decorator(Box<dyn Decorator<C>>),
}

impl<C> Node<C> {
    /// Wraps a terminal behavior.
    pub fn leaf(behavior: impl Behavior<C> + 'static) -> Self {
        Node::Leaf(Box::new(behavior))
    }

    /// Wraps a composite.
    pub fn composite(composite: impl Composite<C> + 'static) -> Self {
        Node::Composite(Box::new(composite))
    }

    /// Wraps a decorator.
    pub fn decorator(decorator: impl Decorator<C> + 'static) -> Self {
        Node::Decorator(Box::new(decorator))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    pub fn is_decorator(&self) -> bool {
        matches!(self, Node::Decorator(_))
    }

    /// Returns the composite capability, if this node has it.
    pub fn as_composite(&self) -> Option<&dyn Composite<C>> {
        match self {
            Node::Composite(composite) => Some(&**composite),
            _ => None,
        }
    }

    /// Returns the decorator capability, if this node has it.
    pub fn as_decorator(&self) -> Option<&dyn Decorator<C>> {
        match self {
            Node::Decorator(decorator) => Some(&**decorator),
            _ => None,
        }
    }

    /// Direct children: none for leaves, zero or one for decorators.
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Composite(composite) => composite.children(),
            Node::Decorator(decorator) => decorator.child().map(slice::from_ref).unwrap_or(&[]),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }

    /// Checks that every decorator has a child and every composite has at
    /// least one.
    pub fn validate(&self) -> Result<(), TreeError> {
        let missing = match self {
            Node::Leaf(_) => false,
            Node::Composite(composite) => composite.children().is_empty(),
            Node::Decorator(decorator) => decorator.child().is_none(),
        };
        if missing {
            return Err(TreeError::MissingChild { node: self.name() });
        }
        self.children().iter().try_for_each(Node::validate)
    }
}

impl<C> Behavior<C> for Node<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self {
            Node::Leaf(leaf) => leaf.tick(ctx),
            Node::Composite(composite) => composite.tick(ctx),
            Node::Decorator(decorator) => decorator.tick(ctx),
        }
    }

    fn reset(&mut self) {
        match self {
            Node::Leaf(leaf) => leaf.reset(),
            Node::Composite(composite) => composite.reset(),
            Node::Decorator(decorator) => decorator.reset(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Composite(composite) => composite.name(),
            Node::Decorator(decorator) => decorator.name(),
        }
    }
}

impl<C> core::fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let tag = match self {
            Node::Leaf(_) => "Leaf",
            Node::Composite(_) => "Composite",
            Node::Decorator(_) => "Decorator",
        };
        let mut tuple = f.debug_tuple(tag);
        tuple.field(&self.name());
        for child in self.children() {
            tuple.field(child);
        }
        tuple.finish()
    }
}
