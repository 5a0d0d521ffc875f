use crate::{
    db::tree::TreeError,
    model::{entity::EntityModel, field::EntityFieldModel},
};

/// Tree path fields of `model`: all of them when `name` is `None`,
/// otherwise exactly the named one.
pub fn locate_fields(
    model: &'static EntityModel,
    name: Option<&str>,
) -> Result<Vec<&'static EntityFieldModel>, TreeError> {
    let Some(name) = name else {
        return Ok(model.tree_path_fields().collect());
    };

    let field = model.field(name).ok_or_else(|| TreeError::UnknownField {
        entity: model.entity_name.to_string(),
        field: name.to_string(),
    })?;
    if !field.kind.is_tree_path() {
        return Err(TreeError::NotAPathField {
            entity: model.entity_name.to_string(),
            field: name.to_string(),
        });
    }

    Ok(vec![field])
}

/// Resolve the single tree path field a query should use.
pub fn locate_field(
    model: &'static EntityModel,
    name: Option<&str>,
) -> Result<&'static EntityFieldModel, TreeError> {
    match locate_fields(model, name)?.as_slice() {
        [] => Err(TreeError::MissingPathField {
            entity: model.entity_name.to_string(),
        }),
        [field] => Ok(*field),
        fields => Err(TreeError::AmbiguousPathField {
            entity: model.entity_name.to_string(),
            candidates: fields.iter().map(|field| field.name).collect(),
        }),
    }
}
