//! Module: db::query
//! Responsibility: lazy row-set construction over one entity's store.
//! Does not own: predicate semantics (see `db::predicate`) or row storage.
//! Boundary: user-facing query surface; `RowSet` is the seam the tree
//! extension is written against.

mod builder;
mod manager;
mod query;
mod rowset;


pub use builder::{FieldRef, LevelRef};
pub use manager::Manager;
pub use query::Query;
pub use rowset::RowSet;

use crate::db::{predicate::ValidateError, store::StoreError};
use thiserror::Error as ThisError;

///
/// QueryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
