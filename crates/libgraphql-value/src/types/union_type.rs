use crate::loc;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
///
/// Only the name and kind of a union matter here: a literal can never be
/// materialized against an output type.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl UnionType {
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
