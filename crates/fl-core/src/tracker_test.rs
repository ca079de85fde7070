use super::*;

fn strict(columns: &[&str]) -> FrameTracker {
    FrameTracker::new_strict("df", columns.iter().map(|c| c.to_string()))
}

fn deps(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_strict_get_existing() {
    let mut tracker = strict(&["A", "B"]);
    assert_eq!(tracker.try_get("A"), None);
}

#[test]
fn test_strict_get_missing_returns_name() {
    let mut tracker = strict(&["A"]);
    assert_eq!(tracker.try_get("X"), Some("X".to_string()));
    // Strict lookups never materialize
    assert!(!tracker.contains("X"));
}

#[test]
fn test_relaxed_get_materializes() {
    let mut tracker = FrameTracker::new_relaxed("df");
    assert_eq!(tracker.try_get("anything"), None);
    assert!(tracker.contains("anything"));
    assert_eq!(tracker.independent(), vec!["anything"]);
}

#[test]
fn test_bare_add_always_succeeds() {
    let mut tracker = strict(&[]);
    assert!(tracker.try_add("C", &[]).is_empty());
    assert!(tracker.contains("C"));
}

#[test]
fn test_add_with_existing_deps() {
    let mut tracker = strict(&["A", "B"]);
    assert!(tracker.try_add("C", &deps(&["A", "B"])).is_empty());
    assert_eq!(tracker.columns["C"], deps(&["A", "B"]).into_iter().collect::<std::collections::BTreeSet<_>>());
}

#[test]
fn test_add_with_missing_deps_reports_all_and_inserts_nothing() {
    let mut tracker = strict(&["A"]);
    let missing = tracker.try_add("C", &deps(&["X", "A", "Y"]));
    assert_eq!(missing, deps(&["X", "Y"]));
    assert!(!tracker.contains("C"));
    assert!(!tracker.contains("X"));
}

#[test]
fn test_relaxed_add_materializes_deps() {
    let mut tracker = FrameTracker::new_relaxed("df");
    assert!(tracker.try_add("C", &deps(&["X", "Y"])).is_empty());
    assert!(tracker.contains("X"));
    assert!(tracker.contains("Y"));
    assert_eq!(tracker.columns["C"], deps(&["X", "Y"]).into_iter().collect::<std::collections::BTreeSet<_>>());
}

#[test]
fn test_reassignment_unions_deps() {
    let mut tracker = strict(&["A", "B"]);
    assert!(tracker.try_add("C", &deps(&["A"])).is_empty());
    assert!(tracker.try_add("C", &deps(&["B"])).is_empty());
    assert_eq!(tracker.columns["C"], deps(&["A", "B"]).into_iter().collect::<std::collections::BTreeSet<_>>());
}

#[test]
fn test_double_write_same_name_is_fine() {
    let mut tracker = strict(&[]);
    assert!(tracker.try_add("C", &[]).is_empty());
    assert!(tracker.try_add("C", &[]).is_empty());
    assert_eq!(tracker.column_names(), vec!["C"]);
}

#[test]
fn test_independent_excludes_derived() {
    let mut tracker = strict(&["A", "B"]);
    tracker.try_add("C", &deps(&["A"]));
    assert_eq!(tracker.independent(), deps(&["A", "B"]));
}

#[test]
fn test_column_names_sorted() {
    let tracker = strict(&["b", "a", "c"]);
    assert_eq!(tracker.column_names(), deps(&["a", "b", "c"]));
}
