use super::*;

fn candidates(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_transposition_suggests() {
    let existing = candidates(&["Name", "Age"]);
    assert_eq!(
        suggest_column("Nmae", &existing),
        Some("Name".to_string())
    );
}

#[test]
fn test_case_insensitive() {
    let existing = candidates(&["AMOUNT"]);
    assert_eq!(
        suggest_column("amount", &existing),
        Some("AMOUNT".to_string())
    );
}

#[test]
fn test_dissimilar_names_give_nothing() {
    let existing = candidates(&["Name", "Age"]);
    assert_eq!(suggest_column("Q", &existing), None);
    assert_eq!(suggest_column("revenue", &existing), None);
}

#[test]
fn test_empty_candidates_give_nothing() {
    assert_eq!(suggest_column("Name", &candidates(&[])), None);
}

#[test]
fn test_close_typo_in_long_name() {
    let existing = candidates(&["customer_id", "order_total"]);
    assert_eq!(
        suggest_column("customer_idd", &existing),
        Some("customer_id".to_string())
    );
}
