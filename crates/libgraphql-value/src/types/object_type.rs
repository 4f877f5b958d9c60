use crate::loc;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
///
/// Object types are output types: they are tracked so that a schema can be
/// loaded as a whole, but literals can never be materialized against them.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            name: name.into(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
