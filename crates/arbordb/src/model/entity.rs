use crate::model::field::EntityFieldModel;

///
/// EntityModel
/// Minimal runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified Rust type path (for dispatch and diagnostics).
    pub path: &'static str,
    /// Stable external name used in diagnostics.
    pub entity_name: &'static str,
    /// Primary key field (points at an entry in `fields`).
    pub primary_key: &'static EntityFieldModel,
    /// Ordered field list (authoritative for runtime planning).
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    /// Look up a field by its declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Look up a field by the storage column it reads from.
    #[must_use]
    pub fn field_by_column(&self, column: &str) -> Option<&'static EntityFieldModel> {
        self.fields.iter().find(|field| field.column == column)
    }

    /// Every field holding a tree path, in declaration order.
    pub fn tree_path_fields(&self) -> impl Iterator<Item = &'static EntityFieldModel> {
        self.fields.iter().filter(|field| field.kind.is_tree_path())
    }
}
