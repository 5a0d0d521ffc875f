use super::*;
use crate::{
    db::query::FieldRef,
    model::field::EntityFieldKind,
    test_fixtures::{Category, Org, tree_path},
    traits::EntityKind,
    value::Value,
};

const PATH: FieldRef = FieldRef::new("tree_path");
const NAME: FieldRef = FieldRef::new("name");

fn phones() -> Category {
    Category::new(2, "phones", "e.p")
}

//
// eval
//

#[test]
fn level_transform_reads_path_depth() {
    let row = phones();

    assert!(eval(&row, &PATH.level().eq(2)));
    assert!(!eval(&row, &PATH.level().eq(1)));
    assert!(eval(&row, &PATH.level().gt(1)));
    assert!(eval(&row, &PATH.level().lte(2)));
}

#[test]
fn descendant_of_includes_the_node_itself() {
    let row = phones();

    assert!(eval(&row, &PATH.descendant_of(tree_path("e"))));
    assert!(eval(&row, &PATH.descendant_of(tree_path("e.p"))));
    assert!(!eval(&row, &PATH.descendant_of(tree_path("e.p.a"))));
    assert!(!eval(&row, &PATH.descendant_of(tree_path("b"))));
}

#[test]
fn ancestor_of_mirrors_descendant_of() {
    let row = phones();

    assert!(eval(&row, &PATH.ancestor_of(tree_path("e.p.a"))));
    assert!(eval(&row, &PATH.ancestor_of(tree_path("e.p"))));
    assert!(!eval(&row, &PATH.ancestor_of(tree_path("e"))));
}

#[test]
fn boolean_combinators_compose() {
    let row = phones();
    let is_phones = NAME.eq("phones");
    let is_root = PATH.level().eq(1);

    assert!(eval(&row, &(is_phones.clone() | is_root.clone())));
    assert!(!eval(&row, &(is_phones.clone() & is_root)));
    assert!(!eval(&row, &!is_phones));
    assert!(!eval(&row, &Predicate::or(Vec::new())));
}

#[test]
fn missing_columns_never_match() {
    let row = phones();

    assert!(!eval(&row, &FieldRef::new("nope").eq(1)));
    assert!(!eval(&row, &FieldRef::new("nope").ne(1)));
}

#[test]
fn null_paths_only_match_is_null() {
    let row = Org::new(4, "eu.de", None);
    let chart = FieldRef::new("chart_path");

    assert!(eval(&row, &chart.is_null()));
    assert!(!eval(&row, &chart.level().eq(1)));
    assert!(!eval(&row, &chart.descendant_of(tree_path("ceo"))));
    assert!(!eval(&row, &chart.not_in([tree_path("ceo")])));
}

#[test]
fn membership_uses_value_equality() {
    let row = phones();

    assert!(eval(&row, &PATH.in_list([tree_path("e.p"), tree_path("b")])));
    assert!(eval(&row, &PATH.not_in([tree_path("e")])));
    assert!(eval(&row, &FieldRef::new("id").in_list([1i64, 2])));
}

//
// validate
//

#[test]
fn validate_accepts_tree_predicates_on_path_columns() {
    let predicate = PATH.level().eq(1) | PATH.descendant_of(tree_path("e"));

    assert_eq!(validate(Category::MODEL, &predicate), Ok(()));
}

#[test]
fn validate_rejects_unknown_columns() {
    // predicates use storage columns, not field names
    let err = validate(Category::MODEL, &FieldRef::new("path").level().eq(1))
        .expect_err("field name is not a column");

    assert_eq!(
        err,
        ValidateError::UnknownField {
            entity: "Category".to_string(),
            field: "path".to_string(),
        }
    );
}

#[test]
fn validate_rejects_tree_ops_on_plain_columns() {
    let err = validate(Category::MODEL, &NAME.descendant_of(tree_path("e")))
        .expect_err("text column");

    assert_eq!(
        err,
        ValidateError::UnsupportedOperator {
            field: "name".to_string(),
            op: CompareOp::DescendantOf,
            kind: EntityFieldKind::Text,
        }
    );
    assert!(validate(Category::MODEL, &NAME.level().eq(1)).is_err());
}

#[test]
fn validate_rejects_mistyped_literals() {
    let not_a_path = PATH.descendant_of("e");
    let not_a_list = Predicate::Compare(ComparePredicate::new(
        "tree_path",
        CompareOp::In,
        Value::Path(tree_path("e")),
    ));

    assert!(matches!(
        validate(Category::MODEL, &not_a_path),
        Err(ValidateError::InvalidLiteral { .. })
    ));
    assert!(matches!(
        validate(Category::MODEL, &not_a_list),
        Err(ValidateError::InvalidLiteral { .. })
    ));
}

#[test]
fn validate_walks_nested_predicates() {
    let nested = Predicate::and(vec![
        PATH.level().eq(1),
        !(NAME.eq("x") | FieldRef::new("ghost").is_null()),
    ]);

    assert!(matches!(
        validate(Category::MODEL, &nested),
        Err(ValidateError::UnknownField { field, .. }) if field == "ghost"
    ));
}
