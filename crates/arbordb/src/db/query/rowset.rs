use crate::{
    db::{predicate::Predicate, query::QueryError},
    traits::EntityKind,
    value::Value,
};

///
/// RowSet
///
/// Capability set of a lazily-evaluated, filterable row-set over one
/// entity. Every combinator is pure; only `values_list` reads storage.
///
/// Tree operations are written against this trait, so any storage layer
/// that can provide these five capabilities gets them for free.
///

pub trait RowSet: Clone + Sized {
    type Entity: EntityKind;

    /// Keep only rows matching `predicate`, on top of existing filters.
    #[must_use]
    fn filter(self, predicate: Predicate) -> Self;

    /// Drop rows matching `predicate`, on top of existing filters.
    #[must_use]
    fn exclude(self, predicate: Predicate) -> Self;

    /// Row-set that yields nothing and never touches storage.
    #[must_use]
    fn none(self) -> Self;

    /// Fresh row-set over every row of the entity, ignoring this one's filters.
    #[must_use]
    fn all(&self) -> Self;

    /// Eagerly read one storage column across the current rows, in row order.
    fn values_list(&self, column: &str) -> Result<Vec<Value>, QueryError>;
}
