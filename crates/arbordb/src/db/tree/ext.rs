use crate::{
    db::{
        predicate::Predicate,
        query::{FieldRef, RowSet},
        tree::{TreeError, locate_field},
    },
    traits::{EntityKind, Path},
    value::Value,
};
use std::collections::HashSet;
use tracing::debug;

///
/// TreeQueryExt
///
/// Hierarchy operations for every `RowSet`.
///
/// `path_field` names the tree path field to use; it may be omitted when
/// the entity declares exactly one. Field resolution errors are returned
/// before any storage access.
///
/// Operations that need the current rows' paths (`get_descendants`,
/// `get_ancestors`, `get_children`) read them with one `values_list` call,
/// then build a fresh query over the whole entity with a single
/// OR-combined predicate, so overlapping subtrees never yield a row twice.
///

pub trait TreeQueryExt: RowSet {
    /// Keep only root rows (path level 1). Pure; reads nothing.
    fn filter_roots(self, path_field: Option<&str>) -> Result<Self, TreeError> {
        let column = path_column::<Self::Entity>(path_field)?;

        Ok(self.filter(FieldRef::new(column).level().eq(1)))
    }

    /// Every row in the subtree of any current row.
    ///
    /// The current rows themselves are excluded unless `include_self`.
    fn get_descendants(
        self,
        include_self: bool,
        path_field: Option<&str>,
    ) -> Result<Self, TreeError> {
        let column = path_column::<Self::Entity>(path_field)?;
        // TODO: read the paths as a sub-query once RowSet can express one
        let paths = current_paths(&self, column)?;
        let fresh = self.all();

        debug!(
            entity = <Self::Entity as Path>::PATH,
            column,
            ancestors = paths.len(),
            include_self,
            "get_descendants"
        );
        if paths.is_empty() {
            return Ok(fresh.none());
        }

        let field = FieldRef::new(column);
        let fresh = if include_self {
            fresh
        } else {
            fresh.exclude(field.in_list(paths.clone()))
        };
        let any_descendant = paths
            .into_iter()
            .map(|path| field.descendant_of(path))
            .collect();

        Ok(fresh.filter(Predicate::or(any_descendant)))
    }

    /// Every row on the path from a root down to any current row.
    ///
    /// The current rows themselves are excluded unless `include_self`.
    fn get_ancestors(
        self,
        include_self: bool,
        path_field: Option<&str>,
    ) -> Result<Self, TreeError> {
        let column = path_column::<Self::Entity>(path_field)?;
        let paths = current_paths(&self, column)?;
        let fresh = self.all();

        debug!(
            entity = <Self::Entity as Path>::PATH,
            column,
            descendants = paths.len(),
            include_self,
            "get_ancestors"
        );
        if paths.is_empty() {
            return Ok(fresh.none());
        }

        let field = FieldRef::new(column);
        let fresh = if include_self {
            fresh
        } else {
            fresh.exclude(field.in_list(paths.clone()))
        };
        let any_ancestor = paths
            .into_iter()
            .map(|path| field.ancestor_of(path))
            .collect();

        Ok(fresh.filter(Predicate::or(any_ancestor)))
    }

    /// Rows exactly one level below any current row.
    fn get_children(self, path_field: Option<&str>) -> Result<Self, TreeError> {
        let column = path_column::<Self::Entity>(path_field)?;
        let paths = current_paths(&self, column)?;
        let fresh = self.all();

        debug!(
            entity = <Self::Entity as Path>::PATH,
            column,
            parents = paths.len(),
            "get_children"
        );

        let field = FieldRef::new(column);
        let any_child: Vec<Predicate> = paths
            .iter()
            .filter_map(Value::as_path)
            .map(|parent| field.descendant_of(parent) & field.level().eq(parent.level() + 1))
            .collect();

        if any_child.is_empty() {
            return Ok(fresh.none());
        }

        Ok(fresh.filter(Predicate::or(any_child)))
    }
}

impl<R: RowSet> TreeQueryExt for R {}

// Storage column of the resolved tree path field.
fn path_column<E: EntityKind>(path_field: Option<&str>) -> Result<&'static str, TreeError> {
    Ok(locate_field(E::MODEL, path_field)?.column)
}

// Distinct non-null paths of the current rows, first-seen order.
fn current_paths<R: RowSet>(rows: &R, column: &str) -> Result<Vec<Value>, TreeError> {
    let mut seen = HashSet::new();

    Ok(rows
        .values_list(column)?
        .into_iter()
        .filter(|value| !value.is_null() && seen.insert(value.clone()))
        .collect())
}
