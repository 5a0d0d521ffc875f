///
/// EntityFieldModel
/// Runtime field metadata used by validation and the tree locator.
///

#[derive(Debug, Eq, PartialEq)]
pub struct EntityFieldModel {
    /// Field name as declared on the entity.
    pub name: &'static str,
    /// Storage column read by predicates; defaults to `name`.
    pub column: &'static str,
    /// Runtime type shape.
    pub kind: EntityFieldKind,
}

impl EntityFieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: EntityFieldKind) -> Self {
        Self {
            name,
            column: name,
            kind,
        }
    }

    /// Store this field under a column name that differs from its name.
    #[must_use]
    pub const fn with_column(mut self, column: &'static str) -> Self {
        self.column = column;
        self
    }
}

///
/// EntityFieldKind
///
/// Minimal type surface needed by the validator.
/// Aligned with `Value` variants.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    Bool,
    Int,
    Text,
    /// Materialized path; the only kind tree queries accept.
    TreePath,
    Uint,

    /// Marker for fields that are not filterable.
    Unsupported,
}

impl EntityFieldKind {
    #[must_use]
    pub const fn is_tree_path(self) -> bool {
        matches!(self, Self::TreePath)
    }
}
