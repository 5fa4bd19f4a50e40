use super::*;

const TOL: f64 = 1e-9;

fn pair() -> (ShapeBox, ShapeBox) {
    (ShapeBox::new("a", 0.0, 0.0, 10.0, 10.0), ShapeBox::new("b", 100.0, 50.0, 20.0, 20.0))
}

#[test]
fn center_swap_exchanges_centers() {
    let (a, b) = pair();
    let patch = swap(&a, &b, SwapMode::Center);
    assert_eq!(patch.get("a"), Some(&BoxPatch::position(105.0, 55.0)));
    assert_eq!(patch.get("b"), Some(&BoxPatch::position(-5.0, -5.0)));
}

#[test]
fn center_swap_keeps_sizes() {
    let (a, b) = pair();
    let patch = swap(&a, &b, SwapMode::Center);
    for (_, p) in patch.iter() {
        assert!(p.width.is_none());
        assert!(p.height.is_none());
    }
}

#[test]
fn center_swap_is_an_involution() {
    let (a, b) = pair();
    let once = swap(&a, &b, SwapMode::Center).apply_to(&[a.clone(), b.clone()]);
    let twice = swap(&once[0], &once[1], SwapMode::Center).apply_to(&once);
    assert!((twice[0].left - a.left).abs() < TOL);
    assert!((twice[0].top - a.top).abs() < TOL);
    assert!((twice[1].left - b.left).abs() < TOL);
    assert!((twice[1].top - b.top).abs() < TOL);
}

#[test]
fn horizontal_swap_omits_top() {
    let (a, b) = pair();
    let patch = swap(&a, &b, SwapMode::Horizontal);
    let pa = patch.get("a").unwrap();
    assert!((pa.left.unwrap() - 105.0).abs() < TOL);
    assert!(pa.top.is_none());
    let pb = patch.get("b").unwrap();
    assert!((pb.left.unwrap() + 5.0).abs() < TOL);
    assert!(pb.top.is_none());
}

#[test]
fn vertical_swap_omits_left() {
    let (a, b) = pair();
    let patch = swap(&a, &b, SwapMode::Vertical);
    let pa = patch.get("a").unwrap();
    assert!(pa.left.is_none());
    assert!((pa.top.unwrap() - 55.0).abs() < TOL);
}

#[test]
fn corner_swap_exchanges_raw_top_left() {
    let (a, b) = pair();
    let patch = swap(&a, &b, SwapMode::Corner);
    assert_eq!(patch.get("a"), Some(&BoxPatch::position(100.0, 50.0)));
    assert_eq!(patch.get("b"), Some(&BoxPatch::position(0.0, 0.0)));
}

#[test]
fn swap_does_not_mutate_input() {
    let (a, b) = pair();
    let (a0, b0) = (a.clone(), b.clone());
    let _ = swap(&a, &b, SwapMode::Center);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
