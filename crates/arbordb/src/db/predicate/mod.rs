//! Module: db::predicate
//! Responsibility: predicate AST, schema validation, and row evaluation.
//! Does not own: fluent construction (see `query::builder`) or storage.

mod ast;
mod eval;
mod validate;

#[cfg(test)]
mod tests;

pub use ast::{CompareOp, ComparePredicate, FieldTransform, Predicate};
pub use validate::ValidateError;

pub(crate) use eval::eval;
pub(crate) use validate::validate;
