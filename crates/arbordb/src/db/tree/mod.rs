//! Module: db::tree
//! Responsibility: hierarchy queries over materialized-path columns.
//! Does not own: path algebra (see `types::TreePath`) or predicate
//! evaluation; everything here composes `RowSet` combinators.

mod ext;
mod locate;


pub use ext::TreeQueryExt;
pub use locate::{locate_field, locate_fields};

use crate::db::query::QueryError;
use thiserror::Error as ThisError;

///
/// TreeError
///
/// Raised eagerly when a tree operation is called, never at evaluation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TreeError {
    #[error("entity '{entity}' declares no tree path field; one is required for tree queries")]
    MissingPathField { entity: String },

    #[error(
        "entity '{entity}' declares several tree path fields; specify which one to use among {candidates:?}"
    )]
    AmbiguousPathField {
        entity: String,
        candidates: Vec<&'static str>,
    },

    #[error("field '{field}' on entity '{entity}' is not a tree path field")]
    NotAPathField { entity: String, field: String },

    #[error("entity '{entity}' has no field named '{field}'")]
    UnknownField { entity: String, field: String },

    #[error(transparent)]
    Query(#[from] QueryError),
}
