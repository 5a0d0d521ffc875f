//! Core runtime for ArborDB: materialized-path tree queries over typed
//! entities, plus the model, values, predicates, and stores they run on.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///
/// Prelude contains domain vocabulary plus the tree extension trait,
/// imported as `_` so it does not collide with caller names.
///

pub mod prelude {
    pub use crate::{
        db::{
            predicate::Predicate,
            query::{FieldRef, Manager, Query, RowSet as _},
            store::DataStore,
            tree::TreeQueryExt as _,
        },
        model::{
            entity::EntityModel,
            field::{EntityFieldKind, EntityFieldModel},
        },
        traits::{EntityKind, FieldValue as _, FieldValues, Path},
        types::TreePath,
        value::Value,
    };
}
