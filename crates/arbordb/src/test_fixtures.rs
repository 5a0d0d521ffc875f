//! Hand-declared entities shared by unit tests.

use crate::{
    db::store::DataStore,
    model::{
        entity::EntityModel,
        field::{EntityFieldKind, EntityFieldModel},
    },
    traits::{EntityKind, FieldValue, FieldValues, Path},
    types::TreePath,
    value::Value,
};

pub(crate) fn tree_path(text: &str) -> TreePath {
    text.parse().expect("fixture path must be valid")
}

///
/// Category
///
/// One tree path field, stored under a column that differs from its name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Category {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) path: TreePath,
}

const CATEGORY_FIELDS: &[EntityFieldModel] = &[
    EntityFieldModel::new("id", EntityFieldKind::Uint),
    EntityFieldModel::new("name", EntityFieldKind::Text),
    EntityFieldModel::new("path", EntityFieldKind::TreePath).with_column("tree_path"),
];

impl Category {
    pub(crate) fn new(id: u64, name: &str, path: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            path: tree_path(path),
        }
    }
}

impl Path for Category {
    const PATH: &'static str = "test_fixtures::Category";
}

impl FieldValues for Category {
    fn get_value(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "tree_path" => Some(self.path.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Category {
    type Key = u64;

    const MODEL: &'static EntityModel = &EntityModel {
        path: Self::PATH,
        entity_name: "Category",
        primary_key: &CATEGORY_FIELDS[0],
        fields: CATEGORY_FIELDS,
    };

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// ```text
/// electronics (e)          books (b)
/// ├── phones (e.p)         └── fiction (b.f)
/// │   └── android (e.p.a)
/// └── laptops (e.l)
/// ```
pub(crate) fn category_store() -> DataStore<Category> {
    let store = DataStore::new();
    for row in [
        Category::new(1, "electronics", "e"),
        Category::new(2, "phones", "e.p"),
        Category::new(3, "android", "e.p.a"),
        Category::new(4, "laptops", "e.l"),
        Category::new(5, "books", "b"),
        Category::new(6, "fiction", "b.f"),
    ] {
        store.insert(row).expect("fixture keys are unique");
    }

    store
}

///
/// Org
///
/// Two independent hierarchies over the same rows; the second is nullable.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Org {
    pub(crate) id: u64,
    pub(crate) geo_path: TreePath,
    pub(crate) chart_path: Option<TreePath>,
}

const ORG_FIELDS: &[EntityFieldModel] = &[
    EntityFieldModel::new("id", EntityFieldKind::Uint),
    EntityFieldModel::new("geo_path", EntityFieldKind::TreePath),
    EntityFieldModel::new("chart_path", EntityFieldKind::TreePath),
];

impl Org {
    pub(crate) fn new(id: u64, geo_path: &str, chart_path: Option<&str>) -> Self {
        Self {
            id,
            geo_path: tree_path(geo_path),
            chart_path: chart_path.map(tree_path),
        }
    }
}

impl Path for Org {
    const PATH: &'static str = "test_fixtures::Org";
}

impl FieldValues for Org {
    fn get_value(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.to_value()),
            "geo_path" => Some(self.geo_path.to_value()),
            "chart_path" => Some(self.chart_path.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Org {
    type Key = u64;

    const MODEL: &'static EntityModel = &EntityModel {
        path: Self::PATH,
        entity_name: "Org",
        primary_key: &ORG_FIELDS[0],
        fields: ORG_FIELDS,
    };

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// Geography: eu > fr > paris, eu > de. Chart: ceo > cto, cto > dev;
/// row 4 sits outside the chart.
pub(crate) fn org_store() -> DataStore<Org> {
    let store = DataStore::new();
    for row in [
        Org::new(1, "eu", Some("ceo")),
        Org::new(2, "eu.fr", Some("ceo.cto")),
        Org::new(3, "eu.fr.paris", Some("ceo.cto.dev")),
        Org::new(4, "eu.de", None),
    ] {
        store.insert(row).expect("fixture keys are unique");
    }

    store
}

///
/// Flat
///
/// No tree path field at all.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Flat {
    pub(crate) id: u64,
    pub(crate) label: String,
}

const FLAT_FIELDS: &[EntityFieldModel] = &[
    EntityFieldModel::new("id", EntityFieldKind::Uint),
    EntityFieldModel::new("label", EntityFieldKind::Text),
];

impl Path for Flat {
    const PATH: &'static str = "test_fixtures::Flat";
}

impl FieldValues for Flat {
    fn get_value(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(self.id.to_value()),
            "label" => Some(self.label.to_value()),
            _ => None,
        }
    }
}

impl EntityKind for Flat {
    type Key = u64;

    const MODEL: &'static EntityModel = &EntityModel {
        path: Self::PATH,
        entity_name: "Flat",
        primary_key: &FLAT_FIELDS[0],
        fields: FLAT_FIELDS,
    };

    fn key(&self) -> Self::Key {
        self.id
    }
}

pub(crate) fn flat_store() -> DataStore<Flat> {
    let store = DataStore::new();
    store
        .insert(Flat {
            id: 1,
            label: "only".to_string(),
        })
        .expect("fixture keys are unique");

    store
}
