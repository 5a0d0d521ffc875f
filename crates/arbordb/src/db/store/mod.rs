//! Module: db::store
//! Responsibility: ordered in-memory row storage for one entity.
//! Does not own: predicate validation or query composition.


use crate::{
    config::DbConfig,
    db::{
        predicate::{Predicate, eval},
        query::Manager,
    },
    obs::sink::{ExecKind, MetricsEvent, Span, record},
    traits::EntityKind,
};
use std::{cell::RefCell, collections::BTreeMap};
use thiserror::Error as ThisError;
use tracing::{debug, trace};

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("duplicate key {key} for entity '{entity}'")]
    DuplicateKey { entity: String, key: String },

    #[error("key {key} not found for entity '{entity}'")]
    NotFound { entity: String, key: String },

    #[error("store for entity '{entity}' is already borrowed")]
    Busy { entity: String },
}

impl StoreError {
    fn duplicate_key<E: EntityKind>(key: E::Key) -> Self {
        Self::DuplicateKey {
            entity: E::MODEL.entity_name.to_string(),
            key: format!("{key:?}"),
        }
    }

    fn not_found<E: EntityKind>(key: E::Key) -> Self {
        Self::NotFound {
            entity: E::MODEL.entity_name.to_string(),
            key: format!("{key:?}"),
        }
    }

    fn busy<E: EntityKind>() -> Self {
        Self::Busy {
            entity: E::MODEL.entity_name.to_string(),
        }
    }
}

///
/// DataStore
///
/// Rows of one entity, ordered by primary key. Single-threaded: rows sit
/// behind a `RefCell`, so queries hold a shared reference and still see
/// writes made after they were built.
///

pub struct DataStore<E: EntityKind> {
    rows: RefCell<BTreeMap<E::Key, E>>,
    debug: bool,
}

impl<E: EntityKind> DataStore<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: RefCell::new(BTreeMap::new()),
            debug: false,
        }
    }

    /// Apply runtime configuration (currently the `debug` flag).
    #[must_use]
    pub const fn with_config(config: &DbConfig) -> Self {
        Self {
            rows: RefCell::new(BTreeMap::new()),
            debug: config.debug,
        }
    }

    /// Manager over this store; the starting point for every query.
    #[must_use]
    pub const fn objects(&self) -> Manager<'_, E> {
        Manager::new(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a new row; an existing key is a conflict.
    pub fn insert(&self, entity: E) -> Result<(), StoreError> {
        let _span = Span::<E>::new(ExecKind::Save);
        let mut rows = self.rows.try_borrow_mut().map_err(|_| StoreError::busy::<E>())?;
        let key = entity.key();

        if rows.contains_key(&key) {
            return Err(StoreError::duplicate_key::<E>(key));
        }
        rows.insert(key, entity);

        Ok(())
    }

    /// Insert or overwrite a row, returning the previous one.
    pub fn replace(&self, entity: E) -> Result<Option<E>, StoreError> {
        let _span = Span::<E>::new(ExecKind::Save);
        let mut rows = self.rows.try_borrow_mut().map_err(|_| StoreError::busy::<E>())?;

        Ok(rows.insert(entity.key(), entity))
    }

    pub fn remove(&self, key: E::Key) -> Result<E, StoreError> {
        let _span = Span::<E>::new(ExecKind::Delete);
        let mut rows = self.rows.try_borrow_mut().map_err(|_| StoreError::busy::<E>())?;

        rows.remove(&key).ok_or_else(|| StoreError::not_found::<E>(key))
    }

    /// Full scan in key order, keeping rows that match `predicate`.
    pub(crate) fn scan(&self, predicate: Option<&Predicate>) -> Result<Vec<E>, StoreError> {
        let mut span = Span::<E>::new(ExecKind::Load);
        let rows = self.rows.try_borrow().map_err(|_| StoreError::busy::<E>())?;

        let matched: Vec<E> = rows
            .values()
            .filter(|row| predicate.is_none_or(|p| eval(*row, p)))
            .cloned()
            .collect();

        let scanned = rows.len() as u64;
        let loaded = matched.len() as u64;
        record(MetricsEvent::RowsScanned {
            entity_path: E::PATH,
            rows_scanned: scanned,
        });
        span.set_rows(loaded);

        if self.debug {
            debug!(entity = E::PATH, scanned, loaded, ?predicate, "load executed");
        } else {
            trace!(entity = E::PATH, scanned, loaded, "load executed");
        }

        Ok(matched)
    }
}

impl<E: EntityKind> Default for DataStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
