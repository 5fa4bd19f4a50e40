use super::*;
use crate::config::ToolsConfig;
use crate::geometry::ShapeBox;
use crate::host::memory::MemoryHost;
use crate::state::test_helpers;

const TOL: f64 = 1e-9;

fn row() -> Vec<ShapeBox> {
    vec![
        ShapeBox::new("a", 0.0, 30.0, 10.0, 10.0),
        ShapeBox::new("b", 10.0, 0.0, 10.0, 10.0),
        ShapeBox::new("c", 40.0, 12.0, 10.0, 10.0),
    ]
}

#[tokio::test]
async fn swap_center_scenario_updates_host() {
    let (state, host) = test_helpers::single_commit_state(vec![
        ShapeBox::new("a", 0.0, 0.0, 10.0, 10.0),
        ShapeBox::new("b", 100.0, 50.0, 20.0, 20.0),
    ]);
    swap_shapes(&state, SwapMode::Center).await.unwrap();

    assert_eq!(host.shape("a"), Some(ShapeBox::new("a", 105.0, 55.0, 10.0, 10.0)));
    assert_eq!(host.shape("b"), Some(ShapeBox::new("b", -5.0, -5.0, 20.0, 20.0)));
}

#[tokio::test]
async fn swap_requires_exactly_two() {
    let (state, host) = test_helpers::single_commit_state(row());
    let err = swap_shapes(&state, SwapMode::Corner).await.unwrap_err();
    assert_eq!(err, ToolError::WrongShapeCount { operation: "Swap Top-Left", expected: 2, actual: 3 });
    assert!(host.commits().is_empty());

    host.select(["a"]);
    let err = swap_shapes(&state, SwapMode::Center).await.unwrap_err();
    assert_eq!(err, ToolError::TooFewShapes { required: 2, actual: 1 });
}

#[tokio::test]
async fn align_left_moves_all_to_min_left() {
    let (state, host) = test_helpers::single_commit_state(row());
    align_shapes(&state, Alignment::Left).await.unwrap();
    for id in ["a", "b", "c"] {
        let s = host.shape(id).unwrap();
        assert!(s.left.abs() < TOL);
        assert!((s.width - 10.0).abs() < TOL);
    }
}

#[tokio::test]
async fn align_needs_two_shapes() {
    let (state, host) = test_helpers::single_commit_state(row());
    host.select(["c"]);
    let err = align_shapes(&state, Alignment::Bottom).await.unwrap_err();
    assert_eq!(err, ToolError::TooFewShapes { required: 2, actual: 1 });
    assert!(host.commits().is_empty());
}

#[tokio::test]
async fn distribute_horizontal_scenario() {
    let (state, host) = test_helpers::single_commit_state(row());
    distribute_shapes(&state, Axis::Horizontal).await.unwrap();
    assert!((host.shape("a").unwrap().left - 0.0).abs() < TOL);
    assert!((host.shape("b").unwrap().left - 20.0).abs() < TOL);
    assert!((host.shape("c").unwrap().left - 40.0).abs() < TOL);
}

#[tokio::test]
async fn distribute_needs_three_shapes() {
    let (state, host) = test_helpers::single_commit_state(row());
    host.select(["a", "b"]);
    let err = distribute_shapes(&state, Axis::Vertical).await.unwrap_err();
    assert_eq!(err, ToolError::TooFewShapes { required: 3, actual: 2 });
}

#[tokio::test]
async fn distribute_respects_reject_policy() {
    let config = ToolsConfig {
        refresh_mode: crate::config::RefreshMode::Single,
        overlap: crate::transform::OverlapPolicy::Reject,
        ..ToolsConfig::default()
    };
    let (state, host) = test_helpers::state_with(
        MemoryHost::new(vec![
            ShapeBox::new("a", 0.0, 0.0, 30.0, 1.0),
            ShapeBox::new("b", 5.0, 0.0, 30.0, 1.0),
            ShapeBox::new("c", 10.0, 0.0, 5.0, 1.0),
        ]),
        config,
    );
    let err = distribute_shapes(&state, Axis::Horizontal).await.unwrap_err();
    assert!(matches!(err, ToolError::OverlappingSpan { .. }));
    assert!(host.commits().is_empty());
}

#[tokio::test(start_paused = true)]
async fn nudge_mode_commits_twice_per_operation() {
    let (state, host) = test_helpers::state_with(MemoryHost::new(row()), ToolsConfig::default());
    align_shapes(&state, Alignment::Top).await.unwrap();

    let commits = host.commits();
    assert_eq!(commits.len(), 2);
    for id in ["a", "b", "c"] {
        assert!(host.shape(id).unwrap().top.abs() < TOL);
    }
}

#[tokio::test(start_paused = true)]
async fn concurrent_operations_do_not_interleave_phases() {
    let (state, host) = test_helpers::state_with(MemoryHost::new(row()), ToolsConfig::default());
    let (left, top) = tokio::join!(align_shapes(&state, Alignment::Left), align_shapes(&state, Alignment::Top));
    left.unwrap();
    top.unwrap();

    let commits = host.commits();
    assert_eq!(commits.len(), 4);
    // Each operation's nudge and settle batches are adjacent.
    for pair in commits.chunks(2) {
        let patches_left = |p: &PositionPatch| p.iter().all(|(_, b)| b.left.is_some() && b.top.is_none());
        assert_eq!(patches_left(&pair[0]), patches_left(&pair[1]));
    }
    for id in ["a", "b", "c"] {
        let s = host.shape(id).unwrap();
        assert!(s.left.abs() < TOL);
        assert!(s.top.abs() < TOL);
    }
}
