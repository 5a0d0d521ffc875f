use crate::{
    db::predicate::{CompareOp, ComparePredicate, FieldTransform, Predicate},
    traits::FieldValues,
    value::Value,
};
use std::cmp::Ordering;

///
/// Evaluate a predicate against a single row.
///
/// This function performs **pure runtime evaluation**:
/// - no schema access
/// - no validation
///
/// Missing columns and undefined comparisons simply evaluate to `false`.
/// CONTRACT: predicates must be validated before evaluation.
///
#[must_use]
pub(crate) fn eval<R: FieldValues + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::False => false,

        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Not(inner) => !eval(row, inner),

        Predicate::Compare(cmp) => eval_compare(row, cmp),
        Predicate::IsNull { field } => matches!(row.get_value(field), Some(Value::Null)),
    }
}

fn eval_compare<R: FieldValues + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let ComparePredicate {
        field,
        transform,
        op,
        value,
    } = cmp;

    let Some(actual) = row.get_value(field) else {
        return false;
    };
    let Some(actual) = apply_transform(actual, *transform) else {
        return false;
    };

    match op {
        CompareOp::Eq => actual.eq_value(value),
        CompareOp::Ne => !actual.is_null() && !value.is_null() && !actual.eq_value(value),
        CompareOp::Lt => ordering(&actual, value).is_some_and(Ordering::is_lt),
        CompareOp::Lte => ordering(&actual, value).is_some_and(Ordering::is_le),
        CompareOp::Gt => ordering(&actual, value).is_some_and(Ordering::is_gt),
        CompareOp::Gte => ordering(&actual, value).is_some_and(Ordering::is_ge),
        CompareOp::In => actual.in_list(value).unwrap_or(false),
        CompareOp::NotIn => !actual.is_null() && actual.in_list(value).is_some_and(|hit| !hit),
        CompareOp::DescendantOf => match (actual.as_path(), value.as_path()) {
            (Some(path), Some(ancestor)) => path.is_descendant_of(ancestor),
            _ => false,
        },
        CompareOp::AncestorOf => match (actual.as_path(), value.as_path()) {
            (Some(path), Some(descendant)) => path.is_ancestor_of(descendant),
            _ => false,
        },
    }
}

fn apply_transform(value: Value, transform: FieldTransform) -> Option<Value> {
    match transform {
        FieldTransform::Identity => Some(value),
        FieldTransform::Level => value.as_path().map(|path| Value::Uint(path.level())),
    }
}

fn ordering(actual: &Value, expected: &Value) -> Option<Ordering> {
    actual.partial_cmp_value(expected)
}
