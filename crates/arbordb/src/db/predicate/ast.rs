use crate::value::Value;
use std::ops::{BitAnd, BitOr, Not};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of query predicates.
/// This layer contains no type validation or execution semantics.
/// All interpretation occurs in later passes:
///
/// - validation (schema-aware)
/// - execution
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    NotIn,
    /// Non-strict: a path is a descendant of itself.
    DescendantOf,
    /// Non-strict: a path is an ancestor of itself.
    AncestorOf,
}

impl CompareOp {
    /// Operators that only make sense against tree-path columns.
    #[must_use]
    pub const fn is_tree_op(self) -> bool {
        matches!(self, Self::DescendantOf | Self::AncestorOf)
    }

    #[must_use]
    pub const fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

///
/// FieldTransform
///
/// Derived attribute read from a column before comparison.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldTransform {
    #[default]
    Identity,
    /// Depth of a tree path (root = 1).
    Level,
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub transform: FieldTransform,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            transform: FieldTransform::Identity,
            op,
            value,
        }
    }

    /// Compare the depth of a tree-path column instead of the path itself.
    #[must_use]
    pub fn level(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            transform: FieldTransform::Level,
            op,
            value,
        }
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull { field: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    /// OR-combine predicates; an empty set matches nothing.
    #[must_use]
    pub fn or(preds: Vec<Self>) -> Self {
        if preds.is_empty() {
            Self::False
        } else {
            Self::Or(preds)
        }
    }

    /// Visit every compare/null leaf in the tree.
    pub(crate) fn for_each_leaf<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        match self {
            Self::True | Self::False => {}
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.for_each_leaf(f);
                }
            }
            Self::Not(inner) => inner.for_each_leaf(f),
            Self::Compare(_) | Self::IsNull { .. } => f(self),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}
