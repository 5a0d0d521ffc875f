//! Fluent column-level predicate construction helpers.

use crate::{
    db::predicate::{CompareOp, ComparePredicate, Predicate},
    traits::FieldValue,
    value::Value,
};

///
/// FieldRef
///
/// Zero-cost wrapper around a static column name used in predicates.
/// Enables method-based predicate builders without allocating.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FieldRef(&'static str);

impl FieldRef {
    /// Create a new field reference.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    // ------------------------------------------------------------------
    // Comparison predicates
    // ------------------------------------------------------------------

    #[must_use]
    pub fn eq(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Eq, value.to_value())
    }

    #[must_use]
    pub fn ne(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Ne, value.to_value())
    }

    #[must_use]
    pub fn lt(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Lt, value.to_value())
    }

    #[must_use]
    pub fn lte(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Lte, value.to_value())
    }

    #[must_use]
    pub fn gt(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Gt, value.to_value())
    }

    #[must_use]
    pub fn gte(self, value: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::Gte, value.to_value())
    }

    /// Membership test against a fixed list.
    #[must_use]
    pub fn in_list<I, V>(self, values: I) -> Predicate
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        compare(self.0, CompareOp::In, list(values))
    }

    #[must_use]
    pub fn not_in<I, V>(self, values: I) -> Predicate
    where
        I: IntoIterator<Item = V>,
        V: FieldValue,
    {
        compare(self.0, CompareOp::NotIn, list(values))
    }

    /// Field is present and explicitly null.
    #[must_use]
    pub fn is_null(self) -> Predicate {
        Predicate::IsNull {
            field: self.0.to_string(),
        }
    }

    // ------------------------------------------------------------------
    // Tree predicates
    // ------------------------------------------------------------------

    /// Path lies in the subtree rooted at `ancestor` (inclusive).
    #[must_use]
    pub fn descendant_of(self, ancestor: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::DescendantOf, ancestor.to_value())
    }

    /// Path lies on the root-to-node chain of `descendant` (inclusive).
    #[must_use]
    pub fn ancestor_of(self, descendant: impl FieldValue) -> Predicate {
        compare(self.0, CompareOp::AncestorOf, descendant.to_value())
    }

    /// Compare the depth of the path instead of the path itself.
    #[must_use]
    pub const fn level(self) -> LevelRef {
        LevelRef(self.0)
    }
}

///
/// LevelRef
///
/// `level` view of a tree-path column; root nodes are level 1.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LevelRef(&'static str);

impl LevelRef {
    #[must_use]
    pub fn eq(self, level: u64) -> Predicate {
        level_compare(self.0, CompareOp::Eq, level)
    }

    #[must_use]
    pub fn lt(self, level: u64) -> Predicate {
        level_compare(self.0, CompareOp::Lt, level)
    }

    #[must_use]
    pub fn lte(self, level: u64) -> Predicate {
        level_compare(self.0, CompareOp::Lte, level)
    }

    #[must_use]
    pub fn gt(self, level: u64) -> Predicate {
        level_compare(self.0, CompareOp::Gt, level)
    }

    #[must_use]
    pub fn gte(self, level: u64) -> Predicate {
        level_compare(self.0, CompareOp::Gte, level)
    }
}

// ----------------------------------------------------------------------
// Internal helpers (not public API)
// ----------------------------------------------------------------------

fn compare(field: &str, op: CompareOp, value: Value) -> Predicate {
    Predicate::Compare(ComparePredicate::new(field, op, value))
}

fn level_compare(field: &str, op: CompareOp, level: u64) -> Predicate {
    Predicate::Compare(ComparePredicate::level(field, op, Value::Uint(level)))
}

fn list<I, V>(values: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: FieldValue,
{
    Value::List(values.into_iter().map(|v| v.to_value()).collect())
}
