//! Fluent, stack-based tree assembly.
//!
//! [`TreeBuilder`] lets callers declare nested structure without wiring
//! parents and children by hand:
//!
//! ```rust
//! use std::time::Duration;
//! use behavior_tree::{Status, TreeBuilder};
//!
//! # fn main() -> Result<(), behavior_tree::TreeError> {
//! let mut tree = TreeBuilder::begin(0u32)
//!     .sequence()
//!         .action(|n: &mut u32| { *n += 1; Status::Success })?
//!         .inverter()
//!             .condition(|n: &u32| *n > 5)?
//!         .log("done")?
//!     .end_composite()?
//!     .build(Duration::ZERO)?;
//!
//! assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
//! # Ok(())
//! # }
//! ```
//!
//! # Stack discipline
//!
//! The builder keeps a parent stack of open frames. Leaves attach to the top
//! frame and are never pushed. Composites and decorators attach to the top
//! frame (if any) and are then pushed themselves. The two parent kinds close
//! differently:
//!
//! - a composite stays open until [`end_composite`](TreeBuilder::end_composite)
//! - a decorator closes itself the moment its single child is attached
//!
//! Every node lives in an arena owned by the builder until
//! [`build`](TreeBuilder::build) resolves the recorded links into an owned
//! [`Node`] graph.

use std::borrow::Cow;
use std::time::Duration;

use crate::{
    Action, AlwaysFail, AlwaysSucceed, Behavior, Composite, Condition, Conditional, Decorator,
    Inverter, Log, Node, Parallel, Repeater, Selector, Sequence, Status, Tree, TreeConfig,
    TreeError, Wait,
};

/// Index of a node in the builder's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// Capability of an open frame on the parent stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// Accepts any number of children; closed explicitly.
    Composite,
    /// Accepts exactly one child; closes on attach.
    Decorator,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    id: NodeId,
    kind: FrameKind,
}

struct Entry<C> {
    node: Node<C>,
    /// Child links, resolved at build time. Decorators never hold more than one.
    children: Vec<NodeId>,
    /// Whether this node was linked under a parent frame.
    attached: bool,
}

/// Stack-based behavior tree assembler.
///
/// Opening operations (`sequence`, `inverter`, ...) cannot fail and return the
/// builder directly. Operations with a precondition return
/// `Result<TreeBuilder<C>, TreeError>` so chains read naturally with `?`.
pub struct TreeBuilder<C> {
    context: C,
    arena: Vec<Entry<C>>,
    parent_stack: Vec<Frame>,
    current: Option<NodeId>,
}

impl<C: 'static> TreeBuilder<C> {
    /// Starts a new tree over `context`. The context is handed to the
    /// resulting [`Tree`] and passed to every node on each tick.
    pub fn begin(context: C) -> Self {
        Self {
            context,
            arena: Vec::new(),
            parent_stack: Vec::new(),
            current: None,
        }
    }

    /// Number of frames currently open.
    pub fn depth(&self) -> usize {
        self.parent_stack.len()
    }

    /// Kind of the frame new nodes would attach to.
    pub fn open_frame(&self) -> Option<FrameKind> {
        self.parent_stack.last().map(|frame| frame.kind)
    }

    /// Number of nodes created so far, including ones that `build` would
    /// discard.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    // ------------------------------------------------------------------------
    // Leaves
    // ------------------------------------------------------------------------

    /// Attaches a closure-backed action leaf.
    pub fn action<F>(self, run: F) -> Result<Self, TreeError>
    where
        F: FnMut(&mut C) -> Status + Send + Sync + 'static,
    {
        self.push_leaf("action", Node::leaf(Action::new(run)))
    }

    /// Attaches a predicate leaf: `Success` when it holds, else `Failure`.
    pub fn condition<F>(self, check: F) -> Result<Self, TreeError>
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.push_leaf("condition", Node::leaf(Condition::new(check)))
    }

    /// Attaches a leaf that logs `message` and succeeds.
    pub fn log(self, message: impl Into<Cow<'static, str>>) -> Result<Self, TreeError> {
        self.push_leaf("log", Node::leaf(Log::new(message)))
    }

    /// Attaches a leaf that stays `Running` for `ticks` evaluations.
    pub fn wait(self, ticks: u32) -> Result<Self, TreeError> {
        self.push_leaf("wait", Node::leaf(Wait::new(ticks)))
    }

    /// Attaches an already assembled subtree as a single terminal child.
    ///
    /// The subtree is not opened: following calls keep targeting the current
    /// frame.
    pub fn subtree(self, root: Node<C>) -> Result<Self, TreeError> {
        self.push_leaf("subtree", root)
    }

    /// Attaches a caller-defined leaf.
    pub fn leaf(self, behavior: impl Behavior<C> + 'static) -> Result<Self, TreeError> {
        self.push_leaf("leaf", Node::leaf(behavior))
    }

    // ------------------------------------------------------------------------
    // Composites
    // ------------------------------------------------------------------------

    /// Opens a [`Sequence`].
    pub fn sequence(self) -> Self {
        self.open_composite(Box::new(Sequence::<C>::new()))
    }

    /// Opens a [`Selector`].
    pub fn selector(self) -> Self {
        self.open_composite(Box::new(Selector::<C>::new()))
    }

    /// Opens a [`Parallel`] with the given vote thresholds.
    pub fn parallel(self, required_to_fail: usize, required_to_succeed: usize) -> Self {
        self.open_composite(Box::new(Parallel::<C>::new(required_to_fail, required_to_succeed)))
    }

    /// Opens a [`Repeater`] that runs its children `times` times.
    pub fn repeater(self, times: u32) -> Self {
        self.open_composite(Box::new(Repeater::<C>::new(times)))
    }

    /// Opens a caller-defined composite.
    pub fn composite(self, composite: impl Composite<C> + 'static) -> Self {
        self.open_composite(Box::new(composite))
    }

    /// Closes the composite on top of the stack.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotAComposite`] if the top frame is a decorator
    /// - [`TreeError::EmptyParentStack`] if nothing is open
    pub fn end_composite(mut self) -> Result<Self, TreeError> {
        let top = self
            .parent_stack
            .last()
            .copied()
            .ok_or(TreeError::EmptyParentStack {
                op: "end_composite",
            })?;

        if top.kind != FrameKind::Composite {
            return Err(TreeError::NotAComposite {
                found: self.arena[top.id.0].node.name(),
            });
        }

        self.parent_stack.pop();
        self.current = Some(top.id);
        tracing::debug!(
            "closed composite {} (depth {})",
            self.arena[top.id.0].node.name(),
            self.depth()
        );
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Decorators
    // ------------------------------------------------------------------------

    /// Opens an [`AlwaysFail`] decorator.
    pub fn always_fail(self) -> Self {
        self.open_decorator(Box::new(AlwaysFail::<C>::new()))
    }

    /// Opens an [`AlwaysSucceed`] decorator.
    pub fn always_succeed(self) -> Self {
        self.open_decorator(Box::new(AlwaysSucceed::<C>::new()))
    }

    /// Opens an [`Inverter`] decorator.
    pub fn inverter(self) -> Self {
        self.open_decorator(Box::new(Inverter::<C>::new()))
    }

    /// Opens a [`Conditional`] decorator guarded by `predicate`.
    pub fn conditional<P>(self, predicate: P) -> Self
    where
        P: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.open_decorator(Box::new(Conditional::<C, P>::new(predicate)))
    }

    /// Opens a caller-defined decorator.
    pub fn decorator(self, decorator: impl Decorator<C> + 'static) -> Self {
        self.open_decorator(Box::new(decorator))
    }

    // ------------------------------------------------------------------------
    // Build
    // ------------------------------------------------------------------------

    /// Consumes the builder and returns the runnable tree.
    ///
    /// The root is the node most recently closed, by `end_composite` or by a
    /// decorator receiving its child. Frames still open and nodes outside the
    /// root's subtree are dropped.
    ///
    /// # Errors
    ///
    /// - [`TreeError::EmptyTree`] if no node was ever closed
    /// - [`TreeError::MissingChild`] if a decorator or composite under the
    ///   root is empty
    pub fn build(self, min_interval: Duration) -> Result<Tree<C>, TreeError> {
        let root_id = self.current.ok_or(TreeError::EmptyTree)?;

        if !self.parent_stack.is_empty() {
            tracing::warn!(
                "building with {} open frame(s); they are discarded",
                self.parent_stack.len()
            );
        }
        if self.arena[root_id.0].attached {
            tracing::warn!(
                "root {} is nested inside another node; enclosing nodes are discarded",
                self.arena[root_id.0].node.name()
            );
        }

        let Self {
            context, arena, ..
        } = self;
        let mut slots: Vec<Option<Entry<C>>> = arena.into_iter().map(Some).collect();
        let root = assemble(&mut slots, root_id);

        tracing::debug!("built tree rooted at {} ({} nodes)", root.name(), root.count());
        Tree::new(context, root, min_interval)
    }

    /// Builds using the interval from `config`.
    pub fn build_with(self, config: &TreeConfig) -> Result<Tree<C>, TreeError> {
        self.build(config.min_interval)
    }

    // ------------------------------------------------------------------------
    // Stack algorithms
    // ------------------------------------------------------------------------

    fn insert(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId(self.arena.len());
        self.arena.push(Entry {
            node,
            children: Vec::new(),
            attached: false,
        });
        id
    }

    fn push_leaf(mut self, op: &'static str, node: Node<C>) -> Result<Self, TreeError> {
        if self.parent_stack.is_empty() {
            return Err(TreeError::EmptyParentStack { op });
        }
        let id = self.insert(node);
        self.attach(id);
        Ok(self)
    }

    fn open_composite(self, composite: Box<dyn Composite<C>>) -> Self {
        self.open_parent(Node::Composite(composite), FrameKind::Composite)
    }

    fn open_decorator(self, decorator: Box<dyn Decorator<C>>) -> Self {
        self.open_parent(Node::Decorator(decorator), FrameKind::Decorator)
    }

    /// Links the new parent under the open frame (if any), then pushes it.
    fn open_parent(mut self, node: Node<C>, kind: FrameKind) -> Self {
        let id = self.insert(node);
        if !self.parent_stack.is_empty() {
            self.attach(id);
        }
        self.parent_stack.push(Frame { id, kind });
        tracing::debug!(
            "opened {} (depth {})",
            self.arena[id.0].node.name(),
            self.depth()
        );
        self
    }

    /// Links `child` under the top frame.
    ///
    /// A composite frame stays open. A decorator frame takes its only child
    /// and is popped in the same step, becoming the current node.
    fn attach(&mut self, child: NodeId) {
        let Some(&top) = self.parent_stack.last() else {
            return;
        };
        self.arena[child.0].attached = true;
        self.arena[top.id.0].children.push(child);

        match top.kind {
            FrameKind::Composite => {}
            FrameKind::Decorator => {
                self.parent_stack.pop();
                self.current = Some(top.id);
                tracing::debug!(
                    "closed decorator {} (depth {})",
                    self.arena[top.id.0].node.name(),
                    self.depth()
                );
            }
        }
    }
}

/// Moves `id` and its linked descendants out of the arena as an owned node.
fn assemble<C>(slots: &mut [Option<Entry<C>>], id: NodeId) -> Node<C> {
    let Some(Entry {
        mut node, children, ..
    }) = slots[id.0].take()
    else {
        unreachable!("arena node {} linked under two parents", id.0);
    };

    for child_id in children {
        let child = assemble(slots, child_id);
        match &mut node {
            Node::Composite(composite) => composite.add_child(child),
            Node::Decorator(decorator) => decorator.set_child(child),
            Node::Leaf(_) => unreachable!("leaves are never opened as frames"),
        }
    }
    node
}
