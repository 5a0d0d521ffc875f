#[cfg(test)]
mod tests;

use crate::types::TreePath;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Value
/// can be used in WHERE statements
///
/// Null        → the field's value is Option::None (i.e., SQL NULL).
/// Path        → a materialized tree path.
/// List        → RHS of membership tests; not stored in rows.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    Path(TreePath),
    List(Vec<Self>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_path(&self) -> Option<&TreePath> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short label used in validation diagnostics.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Text(_) => "text",
            Self::Path(_) => "path",
            Self::List(_) => "list",
        }
    }

    ///
    /// Compare two values of the same family.
    ///
    /// Int and Uint compare numerically across variants. Every other mixed
    /// pairing, and any comparison involving Null or List, is undefined and
    /// returns `None`.
    ///
    #[must_use]
    pub fn partial_cmp_value(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Uint(a), Self::Uint(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Uint(b)) => Some(cmp_int_uint(*a, *b)),
            (Self::Uint(a), Self::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Path(a), Self::Path(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality with numeric widening; undefined comparisons are unequal.
    #[must_use]
    pub fn eq_value(&self, other: &Self) -> bool {
        self.partial_cmp_value(other) == Some(Ordering::Equal)
    }

    /// Membership against a list literal, using `eq_value`.
    #[must_use]
    pub fn in_list(&self, list: &Self) -> Option<bool> {
        list.as_list()
            .map(|items| items.iter().any(|item| self.eq_value(item)))
    }
}

fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    u64::try_from(a).map_or(Ordering::Less, |a| a.cmp(&b))
}

impl From<TreePath> for Value {
    fn from(path: TreePath) -> Self {
        Self::Path(path)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
