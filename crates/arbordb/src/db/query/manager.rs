use crate::{
    db::{
        predicate::Predicate,
        query::Query,
        store::DataStore,
        tree::{TreeError, TreeQueryExt},
    },
    traits::EntityKind,
};

///
/// Manager
///
/// Entry point producing row-sets for one entity store. Every tree
/// operation is also exposed here so callers can start from the manager
/// or from any row-set derived from it.
///

pub struct Manager<'a, E: EntityKind> {
    store: &'a DataStore<E>,
}

impl<'a, E: EntityKind> Manager<'a, E> {
    pub(crate) const fn new(store: &'a DataStore<E>) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn all(&self) -> Query<'a, E> {
        Query::new(self.store)
    }

    #[must_use]
    pub fn filter(&self, predicate: Predicate) -> Query<'a, E> {
        self.all().filter(predicate)
    }

    #[must_use]
    pub fn exclude(&self, predicate: Predicate) -> Query<'a, E> {
        self.all().exclude(predicate)
    }

    #[must_use]
    pub fn none(&self) -> Query<'a, E> {
        self.all().none()
    }

    // ------------------------------------------------------------------
    // Tree operations
    // ------------------------------------------------------------------

    pub fn filter_roots(&self, path_field: Option<&str>) -> Result<Query<'a, E>, TreeError> {
        self.all().filter_roots(path_field)
    }

    pub fn get_descendants(
        &self,
        include_self: bool,
        path_field: Option<&str>,
    ) -> Result<Query<'a, E>, TreeError> {
        self.all().get_descendants(include_self, path_field)
    }

    pub fn get_ancestors(
        &self,
        include_self: bool,
        path_field: Option<&str>,
    ) -> Result<Query<'a, E>, TreeError> {
        self.all().get_ancestors(include_self, path_field)
    }

    pub fn get_children(&self, path_field: Option<&str>) -> Result<Query<'a, E>, TreeError> {
        self.all().get_children(path_field)
    }
}

impl<E: EntityKind> Clone for Manager<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EntityKind> Copy for Manager<'_, E> {}
