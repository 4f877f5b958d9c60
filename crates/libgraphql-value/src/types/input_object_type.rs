use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) fields: IndexMap<String, InputField>,
    pub(super) name: String,
}
impl InputObjectType {
    /// Builds an [`InputObjectType`] with `fields` in the given order. A field
    /// whose name repeats an earlier one replaces it in place.
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = InputField>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            fields: fields.into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
            name: name.into(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.get(name)
    }

    /// The fields of this [`InputObjectType`] in declaration order (fields
    /// added by type extensions follow those of the type definition).
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
