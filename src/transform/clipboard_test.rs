use super::*;

fn source() -> ShapeBox {
    ShapeBox::new("src", 12.0, 34.0, 56.0, 78.0)
}

fn targets() -> Vec<ShapeBox> {
    vec![ShapeBox::new("t1", 1.0, 2.0, 3.0, 4.0), ShapeBox::new("t2", 100.0, 200.0, 30.0, 40.0)]
}

#[test]
fn empty_clipboard_reports_no_clipboard() {
    let clipboard = PositionClipboard::new();
    assert!(!clipboard.has_position());
    assert_eq!(clipboard.snapshot().unwrap_err(), ToolError::NoClipboard);
}

#[test]
fn copy_overwrites_previous_snapshot() {
    let mut clipboard = PositionClipboard::new();
    clipboard.copy(&source());
    clipboard.copy(&ShapeBox::new("other", 1.0, 1.0, 1.0, 1.0));
    let snap = clipboard.snapshot().unwrap();
    assert_eq!(snap, ClipboardSnapshot { left: 1.0, top: 1.0, width: 1.0, height: 1.0 });
}

#[test]
fn snapshot_survives_reads_until_cleared() {
    let mut clipboard = PositionClipboard::new();
    clipboard.copy(&source());
    assert!(clipboard.snapshot().is_ok());
    assert!(clipboard.snapshot().is_ok());
    clipboard.clear();
    assert!(clipboard.snapshot().is_err());
}

#[test]
fn paste_size_only_leaves_position_unpatched() {
    let mut clipboard = PositionClipboard::new();
    let snap = clipboard.copy(&source());
    let input = targets();
    let out = paste_patch(&snap, PasteMode::SizeOnly, &input).apply_to(&input);
    for (before, after) in input.iter().zip(&out) {
        assert!((after.width - 56.0).abs() < f64::EPSILON);
        assert!((after.height - 78.0).abs() < f64::EPSILON);
        assert!((after.left - before.left).abs() < f64::EPSILON);
        assert!((after.top - before.top).abs() < f64::EPSILON);
    }
}

#[test]
fn paste_position_overwrites_not_offsets() {
    let snap = ClipboardSnapshot::from(&source());
    let input = targets();
    let out = paste_patch(&snap, PasteMode::Position, &input).apply_to(&input);
    for (before, after) in input.iter().zip(&out) {
        assert!((after.left - 12.0).abs() < f64::EPSILON);
        assert!((after.top - 34.0).abs() < f64::EPSILON);
        assert!((after.width - before.width).abs() < f64::EPSILON);
    }
}

#[test]
fn paste_all_writes_every_field() {
    let snap = ClipboardSnapshot::from(&source());
    let patch = paste_patch(&snap, PasteMode::All, &targets());
    assert_eq!(patch.len(), 2);
    for (_, p) in patch.iter() {
        assert_eq!(
            *p,
            BoxPatch { left: Some(12.0), top: Some(34.0), width: Some(56.0), height: Some(78.0) }
        );
    }
}
