use crate::ast::ValueNode;
use crate::loc;
use crate::value::ResolvedValue;
use crate::value::Value;

/// Parses a literal into a runtime value for a particular
/// [`ScalarType`].
///
/// Returning [`ResolvedValue::Absent`] or [`ResolvedValue::Null`] signals
/// that the literal could not be interpreted as a value of the scalar type.
pub type ParseLiteralFn = fn(&ValueNode) -> ResolvedValue;

/// Represents a
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) along
/// with the function used to parse literals of that type.
#[derive(Clone)]
pub struct ScalarType {
    pub(super) def_location: loc::SchemaDefLocation,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parse_literal_fn: ParseLiteralFn,
}
impl ScalarType {
    /// Builds a custom [`ScalarType`] whose literals are parsed by
    /// `parse_literal_fn`.
    pub fn new(name: impl Into<String>, parse_literal_fn: ParseLiteralFn) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            name: name.into(),
            parse_literal_fn,
        }
    }

    /// The five scalar types every schema provides: `Boolean`, `Float`, `ID`,
    /// `Int` and `String`.
    pub fn builtins() -> [ScalarType; 5] {
        [
            Self::builtin("Boolean", parse_boolean_literal),
            Self::builtin("Float", parse_float_literal),
            Self::builtin("ID", parse_id_literal),
            Self::builtin("Int", parse_int_literal),
            Self::builtin("String", parse_string_literal),
        ]
    }

    fn builtin(name: &str, parse_literal_fn: ParseLiteralFn) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            description: None,
            name: name.to_string(),
            parse_literal_fn,
        }
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where
    /// this [`ScalarType`] was defined.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SchemaDefLocation::GraphQLBuiltIn
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parse_literal(&self, value_node: &ValueNode) -> ResolvedValue {
        (self.parse_literal_fn)(value_node)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("def_location", &self.def_location)
            .field("description", &self.description)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
impl std::cmp::PartialEq for ScalarType {
    // Parse functions are not comparable, so two scalars are considered equal
    // when they are declared identically.
    fn eq(&self, other: &Self) -> bool {
        self.def_location == other.def_location
            && self.description == other.description
            && self.name == other.name
    }
}

/// The default literal parser for scalars declared in a schema document
/// without a parser of their own: the literal is converted as-is.
pub(crate) fn parse_untyped_literal(value_node: &ValueNode) -> ResolvedValue {
    ResolvedValue::from_ast_untyped(value_node, None)
}

fn parse_boolean_literal(value_node: &ValueNode) -> ResolvedValue {
    match value_node {
        ValueNode::Boolean(value) => Value::Boolean(*value).into(),
        _ => ResolvedValue::Absent,
    }
}

fn parse_float_literal(value_node: &ValueNode) -> ResolvedValue {
    match value_node {
        ValueNode::Float(value) => Value::Float(*value).into(),
        ValueNode::Int(value) => Value::Float(*value as f64).into(),
        _ => ResolvedValue::Absent,
    }
}

fn parse_id_literal(value_node: &ValueNode) -> ResolvedValue {
    match value_node {
        ValueNode::String(value) => Value::String(value.clone()).into(),
        ValueNode::Int(value) => Value::String(value.to_string()).into(),
        _ => ResolvedValue::Absent,
    }
}

// Int is a signed 32-bit integer; larger literals are not Int values.
fn parse_int_literal(value_node: &ValueNode) -> ResolvedValue {
    match value_node {
        ValueNode::Int(value) => i32::try_from(*value)
            .map_or(ResolvedValue::Absent, |value| Value::Int(value).into()),
        _ => ResolvedValue::Absent,
    }
}

fn parse_string_literal(value_node: &ValueNode) -> ResolvedValue {
    match value_node {
        ValueNode::String(value) => Value::String(value.clone()).into(),
        _ => ResolvedValue::Absent,
    }
}
