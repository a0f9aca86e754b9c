use std::time::Duration;

use behavior_tree::{Action, FrameKind, Node, Status, Tree, TreeBuilder, TreeError};

#[derive(Debug, Default)]
struct Agent {
    ticks: u32,
    alert: bool,
}

fn succeed(_: &mut Agent) -> Status {
    Status::Success
}

/// Every leaf op with nothing open fails the same way.
#[test]
fn leaf_ops_require_an_open_parent() {
    let cases: Vec<(&'static str, Result<TreeBuilder<Agent>, TreeError>)> = vec![
        ("action", TreeBuilder::begin(Agent::default()).action(succeed)),
        (
            "condition",
            TreeBuilder::begin(Agent::default()).condition(|a: &Agent| a.alert),
        ),
        ("log", TreeBuilder::begin(Agent::default()).log("hello")),
        ("wait", TreeBuilder::begin(Agent::default()).wait(3)),
        (
            "leaf",
            TreeBuilder::begin(Agent::default()).leaf(behavior_tree::Succeed),
        ),
    ];

    for (op, result) in cases {
        assert_eq!(
            result.err(),
            Some(TreeError::EmptyParentStack { op }),
            "op `{op}`"
        );
    }
}

fn open_decorator(builder: TreeBuilder<Agent>, name: &str) -> TreeBuilder<Agent> {
    match name {
        "always_fail" => builder.always_fail(),
        "always_succeed" => builder.always_succeed(),
        "inverter" => builder.inverter(),
        _ => builder.conditional(|a: &Agent| a.alert),
    }
}

/// Closing a composite while any decorator is on top fails.
#[test]
fn end_composite_rejects_every_open_decorator() {
    for name in ["always_fail", "always_succeed", "inverter", "conditional"] {
        // Both at the root and nested under a composite.
        let at_root = open_decorator(TreeBuilder::begin(Agent::default()), name).end_composite();
        assert_eq!(at_root.err(), Some(TreeError::NotAComposite { found: name }));

        let nested =
            open_decorator(TreeBuilder::begin(Agent::default()).selector(), name).end_composite();
        assert_eq!(nested.err(), Some(TreeError::NotAComposite { found: name }));
    }
}

#[test]
fn decorator_restores_depth_after_one_child() -> Result<(), TreeError> {
    let mut builder = TreeBuilder::begin(Agent::default()).sequence().parallel(1, 1);
    let before = builder.depth();

    builder = builder.inverter().action(succeed)?;
    assert_eq!(builder.depth(), before);

    builder = builder.always_succeed().wait(2)?;
    assert_eq!(builder.depth(), before);

    builder = builder.conditional(|a: &Agent| !a.alert).log("idle")?;
    assert_eq!(builder.depth(), before);
    assert_eq!(builder.open_frame(), Some(FrameKind::Composite));
    Ok(())
}

#[test]
fn composite_depth_drops_by_one_on_end() -> Result<(), TreeError> {
    let builder = TreeBuilder::begin(Agent::default()).selector();
    let before = builder.depth();

    let mut builder = builder.sequence();
    for _ in 0..5 {
        builder = builder.action(succeed)?;
        assert_eq!(builder.depth(), before + 1);
    }

    let builder = builder.end_composite()?;
    assert_eq!(builder.depth(), before);
    Ok(())
}

#[test]
fn build_with_zero_nodes_fails() {
    let result = TreeBuilder::begin(Agent::default()).build(Duration::ZERO);
    assert_eq!(result.err(), Some(TreeError::EmptyTree));
}

/// `begin(ctx).action(_ => Success).build()` cannot be built: a bare leaf has
/// no enclosing parent, so the builder rejects it up front.
#[test]
fn bare_leaf_root_is_rejected() {
    let result = TreeBuilder::begin(Agent::default()).action(succeed);
    assert!(matches!(
        result,
        Err(TreeError::EmptyParentStack { op: "action" })
    ));
}

/// A single-leaf tree is still expressible by handing the leaf to `Tree::new`.
#[test]
fn single_leaf_tree_ticks_to_success() -> Result<(), TreeError> {
    let root = Node::leaf(Action::new(|a: &mut Agent| {
        a.ticks += 1;
        Status::Success
    }));
    let mut tree = Tree::new(Agent::default(), root, Duration::ZERO)?;

    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
    assert_eq!(tree.context().ticks, 1);
    Ok(())
}

#[test]
fn single_leaf_under_decorator_succeeds() -> Result<(), TreeError> {
    let mut tree = TreeBuilder::begin(Agent::default())
        .always_succeed()
        .action(|a: &mut Agent| {
            a.ticks += 1;
            Status::Success
        })?
        .build(Duration::ZERO)?;

    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
    assert_eq!(tree.context().ticks, 1);
    Ok(())
}

#[test]
fn always_fail_auto_closes_into_two_node_tree() -> Result<(), TreeError> {
    let builder = TreeBuilder::begin(Agent::default())
        .always_fail()
        .action(succeed)?;
    assert_eq!(builder.depth(), 0);

    let mut tree = builder.build(Duration::ZERO)?;
    let root = tree.root();
    assert!(root.is_decorator());
    assert_eq!(root.count(), 2);
    assert!(root.children()[0].is_leaf());

    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Failure));
    Ok(())
}

#[test]
fn sequence_root_has_one_child() -> Result<(), TreeError> {
    let mut tree = TreeBuilder::begin(Agent::default())
        .sequence()
        .action(succeed)?
        .end_composite()?
        .build(Duration::ZERO)?;

    let composite = tree.root().as_composite().expect("root is a composite");
    assert_eq!(composite.children().len(), 1);
    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
    Ok(())
}

#[test]
fn ticks_below_interval_do_not_evaluate() -> Result<(), TreeError> {
    let interval = Duration::from_millis(250);
    let mut tree = TreeBuilder::begin(Agent::default())
        .sequence()
        .action(|a: &mut Agent| {
            a.ticks += 1;
            Status::Success
        })?
        .end_composite()?
        .build(interval)?;

    // First tick evaluates immediately and restarts the accumulator.
    assert_eq!(tree.tick(Duration::from_millis(16)), Some(Status::Success));
    assert_eq!(tree.context().ticks, 1);

    let frame = Duration::from_millis(50);
    for _ in 0..4 {
        assert_eq!(tree.tick(frame), None);
    }
    assert_eq!(tree.context().ticks, 1);

    // 5 * 50ms reaches the interval.
    assert_eq!(tree.tick(frame), Some(Status::Success));
    assert_eq!(tree.context().ticks, 2);
    assert_eq!(tree.elapsed(), Duration::ZERO);
    Ok(())
}

/// A guard selector that waits out an alert, then resumes patrolling.
#[test]
fn running_propagates_through_nested_structure() -> Result<(), TreeError> {
    let mut tree = TreeBuilder::begin(Agent {
        ticks: 0,
        alert: true,
    })
    .selector()
    .conditional(|a: &Agent| a.alert)
    .sequence()
    .wait(2)?
    .action(|a: &mut Agent| {
        a.alert = false;
        Status::Success
    })?
    .end_composite()?
    .always_fail()
    .action(|a: &mut Agent| {
        a.ticks += 1;
        Status::Success
    })?
    .log("patrolling")?
    .end_composite()?
    .build(Duration::ZERO)?;

    assert_eq!(tree.root().children().len(), 3);

    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Running));
    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Running));
    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
    assert!(!tree.context().alert);
    assert_eq!(tree.context().ticks, 0);

    // Alert cleared: conditional fails, always_fail runs its action, log wins.
    assert_eq!(tree.tick(Duration::ZERO), Some(Status::Success));
    assert_eq!(tree.context().ticks, 1);
    Ok(())
}

#[test]
fn repeater_keeps_progress_across_ticks() -> Result<(), TreeError> {
    let mut tree = TreeBuilder::begin(Agent::default())
        .repeater(3)
        .action(|a: &mut Agent| {
            a.ticks += 1;
            Status::Success
        })?
        .end_composite()?
        .build(Duration::ZERO)?;

    assert_eq!(tree.evaluate(), Status::Running);
    assert_eq!(tree.evaluate(), Status::Running);
    assert_eq!(tree.evaluate(), Status::Success);
    assert_eq!(tree.context().ticks, 3);
    Ok(())
}
