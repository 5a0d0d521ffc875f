use crate::{model::entity::EntityModel, types::TreePath, value::Value};
use std::fmt::Debug;

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

// ============================================================================
// ENTITY IDENTITY & SCHEMA
// ============================================================================

///
/// EntityKind
///
/// A storable entity: its static model, its primary key, and access to its
/// field values by storage column.
///

pub trait EntityKind: Path + FieldValues + Clone + 'static {
    type Key: Copy + Debug + Ord + FieldValue + 'static;

    const MODEL: &'static EntityModel;

    fn key(&self) -> Self::Key;
}

// ============================================================================
// FIELD VALUES
// ============================================================================

///
/// FieldValues
///
/// Read access to an entity's columns. Returns `None` when the column does
/// not exist on this entity.
///

pub trait FieldValues {
    fn get_value(&self, column: &str) -> Option<Value>;
}

///
/// FieldValue
///
/// Conversion of a Rust value into a predicate literal.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FieldValue for TreePath {
    fn to_value(&self) -> Value {
        Value::Path(self.clone())
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FieldValue for &str {
    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FieldValue for &TreePath {
    fn to_value(&self) -> Value {
        Value::Path((*self).clone())
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, FieldValue::to_value)
    }
}

// impl_field_value
macro_rules! impl_field_value {
    ($variant:ident, $target:ty => $($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

impl_field_value!(Int, i64 => i8, i16, i32, i64);
impl_field_value!(Uint, u64 => u8, u16, u32, u64);
