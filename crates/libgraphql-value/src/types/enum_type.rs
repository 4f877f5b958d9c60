use crate::ast::ValueNode;
use crate::loc;
use crate::value::ResolvedValue;
use crate::value::Value;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = EnumValue>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            name: name.into(),
            values: values.into_iter()
                .map(|value| (value.name.clone(), value))
                .collect(),
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

    /// Parse an enum literal naming one of this type's values into that
    /// value's runtime representation. Any other literal (including a string
    /// spelling a value's name) yields [`ResolvedValue::Absent`].
    pub fn parse_literal(&self, value_node: &ValueNode) -> ResolvedValue {
        if let ValueNode::Enum(value_name) = value_node
            && let Some(enum_value) = self.values.get(value_name) {
            enum_value.value.clone().into()
        } else {
            ResolvedValue::Absent
        }
    }

    /// The values of this [`EnumType`] in the order they were declared.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`].
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) value: Value,
}
impl EnumValue {
    /// Builds an [`EnumValue`] whose runtime representation is
    /// [`Value::Enum`] carrying its own name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            value: Value::Enum(name.clone()),
            name,
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

    /// The runtime value a literal naming this [`EnumValue`] resolves to.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Use `value` instead of [`Value::Enum`] as the runtime representation
    /// of this [`EnumValue`].
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }
}
