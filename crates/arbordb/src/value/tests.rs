use super::*;

fn path(text: &str) -> Value {
    Value::Path(text.parse().expect("valid path"))
}

#[test]
fn numeric_comparison_widens_across_signedness() {
    assert!(Value::Int(1).eq_value(&Value::Uint(1)));
    assert_eq!(
        Value::Int(-1).partial_cmp_value(&Value::Uint(0)),
        Some(Ordering::Less)
    );
    assert_eq!(
        Value::Uint(u64::MAX).partial_cmp_value(&Value::Int(i64::MAX)),
        Some(Ordering::Greater)
    );
}

#[test]
fn mixed_families_are_undefined() {
    assert_eq!(Value::Text("1".into()).partial_cmp_value(&Value::Int(1)), None);
    assert_eq!(Value::Null.partial_cmp_value(&Value::Null), None);
    assert!(!Value::Null.eq_value(&Value::Null));
}

#[test]
fn paths_compare_by_labels() {
    assert!(path("a.b").eq_value(&path("a.b")));
    assert_eq!(
        path("a").partial_cmp_value(&path("a.b")),
        Some(Ordering::Less)
    );
}

#[test]
fn in_list_requires_list_literal() {
    let list = Value::List(vec![path("a"), path("b")]);

    assert_eq!(path("b").in_list(&list), Some(true));
    assert_eq!(path("c").in_list(&list), Some(false));
    assert_eq!(path("a").in_list(&path("a")), None);
}

#[test]
fn option_maps_none_to_null() {
    let missing: Option<TreePath> = None;

    assert_eq!(Value::from(missing), Value::Null);
}
