use super::*;
use std::collections::BTreeSet;

fn str_value(s: &str) -> Value {
    Value::Str(s.to_string())
}

fn cols(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn positional(values: Vec<Value>) -> CallArgs {
    CallArgs {
        positional: values,
        keyword: Vec::new(),
    }
}

fn keyword(pairs: Vec<(&str, Value)>) -> CallArgs {
    CallArgs {
        positional: Vec::new(),
        keyword: pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

#[test]
fn test_arg_or_kw_prefers_positional() {
    let mut args = positional(vec![str_value("pos")]);
    args.keyword.push(("data".to_string(), str_value("kw")));
    assert_eq!(args.arg_or_kw(0, "data"), &str_value("pos"));
}

#[test]
fn test_arg_or_kw_missing_is_unknown() {
    let args = CallArgs::default();
    assert!(args.arg_or_kw(0, "data").is_unknown());
}

#[test]
fn test_dataframe_from_dict() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    let args = positional(vec![Value::Dict(vec![
        ("A".to_string(), Value::Unknown),
        ("B".to_string(), Value::Unknown),
    ])]);
    assert_eq!(handler(&args), Some(cols(&["A", "B"])));
}

#[test]
fn test_dataframe_from_dict_keyword() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    let args = keyword(vec![(
        "data",
        Value::Dict(vec![("A".to_string(), Value::Unknown)]),
    )]);
    assert_eq!(handler(&args), Some(cols(&["A"])));
}

#[test]
fn test_dataframe_from_list_of_dicts_unions_keys() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    let args = positional(vec![Value::List(vec![
        Value::Dict(vec![("a".to_string(), Value::Unknown)]),
        Value::Dict(vec![
            ("a".to_string(), Value::Unknown),
            ("b".to_string(), Value::Unknown),
        ]),
    ])]);
    assert_eq!(handler(&args), Some(cols(&["a", "b"])));
}

#[test]
fn test_dataframe_from_list_with_non_dict_is_unresolved() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    let args = positional(vec![Value::List(vec![
        Value::Dict(vec![("a".to_string(), Value::Unknown)]),
        Value::Unknown,
    ])]);
    assert_eq!(handler(&args), None);
}

#[test]
fn test_dataframe_from_frame_value_is_unresolved() {
    // Copy-construction from another frame is not modeled; the handler
    // must not fabricate schema from it
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    let args = positional(vec![Value::Frame(cols(&["A"]))]);
    assert_eq!(handler(&args), None);
}

#[test]
fn test_dataframe_unknown_data_is_unresolved() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("DataFrame").unwrap();
    assert_eq!(handler(&CallArgs::default()), None);
}

#[test]
fn test_read_csv_usecols_list() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("read_csv").unwrap();
    let args = keyword(vec![(
        "usecols",
        Value::List(vec![str_value("a"), str_value("b")]),
    )]);
    assert_eq!(handler(&args), Some(cols(&["a", "b"])));
}

#[test]
fn test_read_csv_usecols_single_string() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("read_csv").unwrap();
    let args = keyword(vec![("usecols", str_value("only"))]);
    assert_eq!(handler(&args), Some(cols(&["only"])));
}

#[test]
fn test_read_csv_usecols_with_non_string_element_is_unresolved() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("read_csv").unwrap();
    let args = keyword(vec![(
        "usecols",
        Value::List(vec![str_value("a"), Value::Unknown]),
    )]);
    assert_eq!(handler(&args), None);
}

#[test]
fn test_read_csv_without_usecols_is_unresolved() {
    let registry = ConstructorRegistry::builtin();
    let handler = registry.get("read_csv").unwrap();
    let args = positional(vec![str_value("f.csv")]);
    assert_eq!(handler(&args), None);
}

#[test]
fn test_unknown_constructor_name() {
    let registry = ConstructorRegistry::builtin();
    assert!(registry.get("read_parquet").is_none());
}

#[test]
fn test_assign_returns_receiver_plus_kwargs() {
    let registry = MethodRegistry::builtin();
    let handler = registry.get("assign").unwrap();
    let receiver = cols(&["A"]);
    let args = keyword(vec![("B", Value::Unknown), ("C", Value::Unknown)]);
    let outcome = handler(&receiver, &args);
    assert_eq!(outcome.updated, cols(&["A"]));
    assert_eq!(outcome.returned, Some(cols(&["A", "B", "C"])));
}

#[test]
fn test_insert_positional_column() {
    let registry = MethodRegistry::builtin();
    let handler = registry.get("insert").unwrap();
    let receiver = cols(&["A"]);
    let args = positional(vec![Value::Unknown, str_value("B"), Value::Unknown]);
    let outcome = handler(&receiver, &args);
    assert_eq!(outcome.updated, cols(&["A", "B"]));
    assert!(outcome.returned.is_none());
}

#[test]
fn test_insert_keyword_column() {
    let registry = MethodRegistry::builtin();
    let handler = registry.get("insert").unwrap();
    let receiver = cols(&["A"]);
    let args = keyword(vec![("column", str_value("B"))]);
    assert_eq!(handler(&receiver, &args).updated, cols(&["A", "B"]));
}

#[test]
fn test_insert_with_unknown_column_keeps_receiver() {
    let registry = MethodRegistry::builtin();
    let handler = registry.get("insert").unwrap();
    let receiver = cols(&["A"]);
    let args = positional(vec![Value::Unknown, Value::Unknown]);
    assert_eq!(handler(&receiver, &args).updated, cols(&["A"]));
}
