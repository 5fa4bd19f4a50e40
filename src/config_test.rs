use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ToolsConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ToolsConfig::default());
    assert_eq!(cfg.refresh_mode, RefreshMode::Nudge);
    assert_eq!(cfg.overlap, OverlapPolicy::Pack);
    assert_eq!(cfg.refresh.small_move_pause, Duration::from_millis(150));
    assert_eq!(cfg.refresh.large_move_pause, Duration::from_millis(30));
}

#[test]
fn parses_overrides() {
    let cfg = ToolsConfig::from_lookup(lookup_from(&[
        ("STRATEGY_TOOLS_REFRESH_MODE", "single"),
        ("STRATEGY_TOOLS_OVERLAP", "reject"),
        ("STRATEGY_TOOLS_SMALL_MOVE_THRESHOLD", "2.5"),
        ("STRATEGY_TOOLS_LARGE_NUDGE", "1"),
        ("STRATEGY_TOOLS_SMALL_PAUSE_MS", " 200 "),
        ("STRATEGY_TOOLS_SETTLE_ATTEMPTS", "4"),
    ]))
    .unwrap();
    assert_eq!(cfg.refresh_mode, RefreshMode::Single);
    assert_eq!(cfg.overlap, OverlapPolicy::Reject);
    assert!((cfg.refresh.small_move_threshold - 2.5).abs() < f64::EPSILON);
    assert!((cfg.refresh.large_move_nudge - 1.0).abs() < f64::EPSILON);
    assert_eq!(cfg.refresh.small_move_pause, Duration::from_millis(200));
    assert_eq!(cfg.refresh.settle_attempts, 4);
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    let cfg = ToolsConfig::from_lookup(lookup_from(&[
        ("STRATEGY_TOOLS_SMALL_NUDGE", "lots"),
        ("STRATEGY_TOOLS_SETTLE_ATTEMPTS", "0"),
    ]))
    .unwrap();
    assert!((cfg.refresh.small_move_nudge - DEFAULT_SMALL_MOVE_NUDGE).abs() < f64::EPSILON);
    assert_eq!(cfg.refresh.settle_attempts, 1);
}

#[test]
fn non_positive_nudge_values_fall_back_to_defaults() {
    for bad in ["0", "NaN", "-5", "inf"] {
        let cfg = ToolsConfig::from_lookup(lookup_from(&[
            ("STRATEGY_TOOLS_SMALL_NUDGE", bad),
            ("STRATEGY_TOOLS_LARGE_NUDGE", bad),
            ("STRATEGY_TOOLS_SMALL_MOVE_THRESHOLD", bad),
        ]))
        .unwrap();
        assert_eq!(cfg.refresh, RefreshConfig::default(), "{bad}");
    }
}

#[test]
fn unknown_mode_is_rejected() {
    let err = ToolsConfig::from_lookup(lookup_from(&[("STRATEGY_TOOLS_REFRESH_MODE", "twice")])).unwrap_err();
    assert!(matches!(err, ToolError::Config(ref m) if m.contains("twice")));
}

#[test]
fn unknown_overlap_is_rejected() {
    let err = ToolsConfig::from_lookup(lookup_from(&[("STRATEGY_TOOLS_OVERLAP", "squash")])).unwrap_err();
    assert!(matches!(err, ToolError::Config(_)));
}
