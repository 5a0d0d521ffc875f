use crate::{
    db::{
        predicate::{Predicate, ValidateError, validate},
        query::{QueryError, RowSet},
        store::DataStore,
    },
    obs::sink::{MetricsEvent, record},
    traits::EntityKind,
    value::Value,
};
use std::fmt;

///
/// Query
///
/// Lazy row-set bound to one entity store.
/// Building a query never reads storage; each terminal call (`execute`,
/// `count`, `exists`, `keys`, `values_list`) performs exactly one scan,
/// and a query can be evaluated any number of times.
///

pub struct Query<'a, E: EntityKind> {
    store: &'a DataStore<E>,
    predicate: Option<Predicate>,
    empty: bool,
}

impl<'a, E: EntityKind> Query<'a, E> {
    pub(crate) const fn new(store: &'a DataStore<E>) -> Self {
        Self {
            store,
            predicate: None,
            empty: false,
        }
    }

    // ------------------------------------------------------------------
    // Intent inspection
    // ------------------------------------------------------------------

    /// Accumulated filter, if any.
    #[must_use]
    pub const fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    /// Whether this query was reduced to the empty result.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.empty
    }

    // ------------------------------------------------------------------
    // Intent builders (pure)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(match self.predicate.take() {
            Some(existing) => existing & predicate,
            None => predicate,
        });
        self
    }

    #[must_use]
    pub fn exclude(self, predicate: Predicate) -> Self {
        self.filter(!predicate)
    }

    #[must_use]
    pub fn none(mut self) -> Self {
        self.empty = true;
        self
    }

    #[must_use]
    pub const fn all(&self) -> Self {
        Self::new(self.store)
    }

    // ------------------------------------------------------------------
    // Terminals (one store round-trip each)
    // ------------------------------------------------------------------

    /// Materialize matching rows in key order.
    pub fn execute(&self) -> Result<Vec<E>, QueryError> {
        self.load()
    }

    pub fn count(&self) -> Result<usize, QueryError> {
        Ok(self.load()?.len())
    }

    pub fn exists(&self) -> Result<bool, QueryError> {
        Ok(!self.load()?.is_empty())
    }

    pub fn keys(&self) -> Result<Vec<E::Key>, QueryError> {
        Ok(self.load()?.iter().map(EntityKind::key).collect())
    }

    /// Read one storage column across matching rows, in key order.
    pub fn values_list(&self, column: &str) -> Result<Vec<Value>, QueryError> {
        if E::MODEL.field_by_column(column).is_none() {
            return Err(ValidateError::UnknownField {
                entity: E::MODEL.entity_name.to_string(),
                field: column.to_string(),
            }
            .into());
        }

        Ok(self
            .load()?
            .iter()
            .map(|row| row.get_value(column).unwrap_or(Value::Null))
            .collect())
    }

    fn load(&self) -> Result<Vec<E>, QueryError> {
        if self.empty {
            record(MetricsEvent::EmptyShortCircuit {
                entity_path: E::PATH,
            });
            return Ok(Vec::new());
        }
        if let Some(predicate) = &self.predicate {
            validate(E::MODEL, predicate)?;
        }

        Ok(self.store.scan(self.predicate.as_ref())?)
    }
}

impl<E: EntityKind> Clone for Query<'_, E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            predicate: self.predicate.clone(),
            empty: self.empty,
        }
    }
}

impl<E: EntityKind> fmt::Debug for Query<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("entity", &E::PATH)
            .field("predicate", &self.predicate)
            .field("empty", &self.empty)
            .finish()
    }
}

impl<E: EntityKind> RowSet for Query<'_, E> {
    type Entity = E;

    fn filter(self, predicate: Predicate) -> Self {
        Query::filter(self, predicate)
    }

    fn exclude(self, predicate: Predicate) -> Self {
        Query::exclude(self, predicate)
    }

    fn none(self) -> Self {
        Query::none(self)
    }

    fn all(&self) -> Self {
        Query::all(self)
    }

    fn values_list(&self, column: &str) -> Result<Vec<Value>, QueryError> {
        Query::values_list(self, column)
    }
}
