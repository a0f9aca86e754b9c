//! Construction faults.
//!
//! Every variant describes a bug in the sequence of builder calls (or a node
//! graph assembled by hand). None of them is a runtime outcome: a node that
//! fails returns [`Status::Failure`](crate::Status::Failure) instead.

/// Errors raised while assembling a behavior tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A leaf or other child-only operation ran with no open parent frame.
    #[error("`{op}` needs an open composite or decorator to attach to")]
    EmptyParentStack {
        /// Builder operation that was rejected.
        op: &'static str,
    },

    /// `end_composite` ran while the top frame was a decorator.
    ///
    /// Decorators close themselves once their child is attached.
    #[error("cannot end a composite: the open frame is the decorator `{found}`")]
    NotAComposite {
        /// Name of the decorator on top of the stack.
        found: &'static str,
    },

    /// `build` ran before any node was attached or closed.
    #[error("cannot build a behavior tree with zero nodes")]
    EmptyTree,

    /// A decorator or composite has no child to evaluate.
    #[error("`{node}` has no child")]
    MissingChild {
        /// Name of the childless node.
        node: &'static str,
    },
}

impl TreeError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyParentStack { .. } => "empty_parent_stack",
            Self::NotAComposite { .. } => "not_a_composite",
            Self::EmptyTree => "empty_tree",
            Self::MissingChild { .. } => "missing_child",
        }
    }
}
