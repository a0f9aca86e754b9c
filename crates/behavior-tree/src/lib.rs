//! Lightweight behavior tree library with a fluent, stack-based builder.
//!
//! This library assembles behavior trees from chained builder calls and runs
//! them with a caller-driven, throttled tick.
//!
//! - **Three-state results**: `Success`, `Failure` and `Running`
//! - **Synchronous ticks**: a tick runs to completion; long work returns
//!   `Running` and resumes on a later tick
//! - **Construction-time checks**: malformed call sequences fail with
//!   [`TreeError`] before the tree ever runs
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes, with [`Composite`] and
//!   [`Decorator`] capabilities layered on top
//! - [`Node`]: Owned node tagged by capability
//! - [`Status`]: Success, Failure or Running
//! - Leaf nodes: [`Action`], [`Condition`], [`Log`], [`Wait`], [`Succeed`], [`Fail`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`], [`Repeater`]
//! - Decorator nodes: [`AlwaysFail`], [`AlwaysSucceed`], [`Inverter`], [`Conditional`]
//! - [`TreeBuilder`]: Assembles nodes into a [`Tree`]
//! - [`Tree`]: Owns the context and root, throttles evaluation

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::{Behavior, Composite, Decorator};
pub use builder::{FrameKind, TreeBuilder};
pub use composite::{Parallel, Repeater, Selector, Sequence};
pub use config::TreeConfig;
pub use decorator::{AlwaysFail, AlwaysSucceed, Conditional, Inverter};
pub use error::TreeError;
pub use leaf::{Action, Condition, Fail, Log, Succeed, Wait};
pub use node::Node;
pub use status::Status;
pub use tree::Tree;
