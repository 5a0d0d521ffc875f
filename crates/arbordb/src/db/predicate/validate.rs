use crate::{
    db::predicate::{CompareOp, ComparePredicate, FieldTransform, Predicate},
    model::{entity::EntityModel, field::EntityFieldKind},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// ValidateError
///
/// Schema-level rejection of a predicate before any row is read.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValidateError {
    #[error("unknown column '{field}' on entity '{entity}'")]
    UnknownField { entity: String, field: String },

    #[error("operator {op:?} is not supported on column '{field}' ({kind:?})")]
    UnsupportedOperator {
        field: String,
        op: CompareOp,
        kind: EntityFieldKind,
    },

    #[error("invalid literal for column '{field}': {message}")]
    InvalidLiteral { field: String, message: String },
}

///
/// Validate a predicate against an entity model.
///
/// Predicates name storage columns; every referenced column must exist.
/// Tree operators and the `Level` transform require a tree-path column.
///
pub(crate) fn validate(model: &EntityModel, predicate: &Predicate) -> Result<(), ValidateError> {
    let mut result = Ok(());

    predicate.for_each_leaf(&mut |leaf| {
        if result.is_err() {
            return;
        }
        result = match leaf {
            Predicate::Compare(cmp) => validate_compare(model, cmp),
            Predicate::IsNull { field } => column_kind(model, field).map(|_| ()),
            _ => Ok(()),
        };
    });

    result
}

fn column_kind(model: &EntityModel, column: &str) -> Result<EntityFieldKind, ValidateError> {
    model
        .field_by_column(column)
        .map(|field| field.kind)
        .ok_or_else(|| ValidateError::UnknownField {
            entity: model.entity_name.to_string(),
            field: column.to_string(),
        })
}

fn validate_compare(model: &EntityModel, cmp: &ComparePredicate) -> Result<(), ValidateError> {
    let kind = column_kind(model, &cmp.field)?;
    let unsupported = || ValidateError::UnsupportedOperator {
        field: cmp.field.clone(),
        op: cmp.op,
        kind,
    };

    if kind == EntityFieldKind::Unsupported {
        return Err(unsupported());
    }

    if cmp.transform == FieldTransform::Level {
        if !kind.is_tree_path() || cmp.op.is_tree_op() {
            return Err(unsupported());
        }
        return check_literals(
            cmp,
            |value| matches!(value, Value::Int(_) | Value::Uint(_)),
            "level",
        );
    }

    if cmp.op.is_tree_op() {
        if !kind.is_tree_path() {
            return Err(unsupported());
        }
        return check_literals(cmp, |value| matches!(value, Value::Path(_)), "path");
    }

    if cmp.op.is_membership() && cmp.value.as_list().is_none() {
        return Err(ValidateError::InvalidLiteral {
            field: cmp.field.clone(),
            message: format!("{:?} expects a list, got {}", cmp.op, cmp.value.kind_label()),
        });
    }

    Ok(())
}

// Check the literal (or every list item, for membership) against `accept`.
fn check_literals(
    cmp: &ComparePredicate,
    accept: impl Fn(&Value) -> bool,
    expected: &str,
) -> Result<(), ValidateError> {
    let ok = match (&cmp.value, cmp.op.is_membership()) {
        (Value::List(items), true) => items.iter().all(&accept),
        (_, true) => false,
        (value, false) => accept(value),
    };

    if ok {
        Ok(())
    } else {
        Err(ValidateError::InvalidLiteral {
            field: cmp.field.clone(),
            message: format!("expected {expected} literal, got {}", cmp.value.kind_label()),
        })
    }
}
