use super::*;
use crate::host::memory::MemoryHost;

fn host_with(n: usize) -> MemoryHost {
    #[allow(clippy::cast_precision_loss)]
    let shapes = (0..n)
        .map(|i| ShapeBox::new(format!("s{i}"), i as f64 * 10.0, 0.0, 5.0, 5.0))
        .collect();
    MemoryHost::new(shapes)
}

#[tokio::test]
async fn load_selection_returns_boxes_in_order() {
    let host = host_with(3);
    let selection = load_selection(&host, 2).await.unwrap();
    let ids: Vec<_> = selection.boxes.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["s0", "s1", "s2"]);
}

#[tokio::test]
async fn load_selection_rejects_too_few() {
    let host = host_with(1);
    let err = load_selection(&host, 2).await.unwrap_err();
    assert_eq!(err, ToolError::TooFewShapes { required: 2, actual: 1 });
    assert_eq!(err.to_string(), "Select at least 2 shapes. You selected 1.");
}

#[tokio::test]
async fn load_selection_does_not_write() {
    let host = host_with(2);
    let _ = load_selection(&host, 1).await.unwrap();
    assert!(host.commits().is_empty());
}

#[tokio::test]
async fn require_exactly_checks_count() {
    let host = host_with(3);
    let selection = load_selection(&host, 1).await.unwrap();
    assert!(selection.require_exactly(3, "Op").is_ok());
    assert_eq!(
        selection.require_exactly(2, "Swap Position").unwrap_err(),
        ToolError::WrongShapeCount { operation: "Swap Position", expected: 2, actual: 3 }
    );
}
