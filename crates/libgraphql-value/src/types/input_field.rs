use crate::loc;
use crate::types::TypeRef;
use crate::value::ResolvedValue;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) default_value: ResolvedValue,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_ref: TypeRef,
}
impl InputField {
    /// Builds an [`InputField`] without a default value.
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            default_value: ResolvedValue::Absent,
            description: None,
            name: name.into(),
            type_ref,
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The value used for this field when an object literal omits it (or
    /// provides something that resolves to no value).
    ///
    /// [`ResolvedValue::Absent`] means the field has no default. Note that a
    /// default of [`ResolvedValue::Null`] is a real default.
    pub fn default_value(&self) -> &ResolvedValue {
        &self.default_value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type of this [`InputField`].
    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn with_default_value(mut self, default_value: impl Into<ResolvedValue>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
