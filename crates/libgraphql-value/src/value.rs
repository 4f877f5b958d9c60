use crate::ast::ValueNode;
use indexmap::IndexMap;

/// Runtime values supplied for an operation's variables, keyed by variable
/// name (without the leading `$`).
pub type Variables = IndexMap<String, ResolvedValue>;

/// The outcome of materializing a literal.
///
/// [`ResolvedValue::Absent`] means "no value is available" (e.g. the literal
/// was omitted or could not be interpreted) whereas [`ResolvedValue::Null`]
/// means "the value is explicitly null". The two are never interchangeable:
/// an absent input object field falls back to its default value, a null one
/// does not.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResolvedValue {
    Absent,
    Null,
    Value(Value),
}
impl ResolvedValue {
    pub fn as_value(&self) -> Option<&Value> {
        if let Self::Value(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn into_value(self) -> Option<Value> {
        if let Self::Value(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Either [`ResolvedValue::Absent`] or [`ResolvedValue::Null`].
    pub fn is_nullish(&self) -> bool {
        !matches!(self, Self::Value(_))
    }

    /// Convert a literal into a runtime value without any expected type to
    /// guide the conversion.
    ///
    /// Int literals become [`Value::Int`] when they fit in 32 bits and
    /// [`Value::Float`] otherwise, enum literals become [`Value::Enum`], and
    /// object literals keep the last occurrence of a repeated field name.
    /// Variables missing from `variables` become [`ResolvedValue::Absent`].
    pub fn from_ast_untyped(
        value_node: &ValueNode,
        variables: Option<&Variables>,
    ) -> Self {
        match value_node {
            ValueNode::Variable(var_name) =>
                variables
                    .and_then(|vars| vars.get(var_name))
                    .cloned()
                    .unwrap_or(Self::Absent),

            ValueNode::Int(value) =>
                i32::try_from(*value)
                    .map(Value::Int)
                    .unwrap_or(Value::Float(*value as f64))
                    .into(),

            ValueNode::Float(value) =>
                Value::Float(*value).into(),

            ValueNode::String(value) =>
                Value::String(value.clone()).into(),

            ValueNode::Boolean(value) =>
                Value::Boolean(*value).into(),

            ValueNode::Null =>
                Self::Null,

            ValueNode::Enum(value) =>
                Value::Enum(value.clone()).into(),

            ValueNode::List(item_nodes) =>
                Value::List(item_nodes.iter().map(|item_node|
                    Self::from_ast_untyped(item_node, variables)
                ).collect()).into(),

            ValueNode::Object(fields) =>
                Value::Object(fields.iter().map(|field|
                    (field.name.clone(), Self::from_ast_untyped(&field.value, variables))
                ).collect()).into(),
        }
    }
}
impl ResolvedValue {
    /// Structural identity, where floats are compared by their bits. Unlike
    /// `==`, a value containing `NaN` is identical to itself.
    pub(crate) fn is_identical_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) | (Self::Null, Self::Null) => true,
            (Self::Value(value), Self::Value(other_value)) =>
                value.is_identical_to(other_value),
            _ => false,
        }
    }
}
impl std::convert::From<Value> for ResolvedValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
impl std::fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::Null => f.write_str("null"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// A non-null runtime value.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i32),
    List(Vec<ResolvedValue>),
    Object(IndexMap<String, ResolvedValue>),
    String(String),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        if let Self::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[ResolvedValue]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ResolvedValue>> {
        if let Self::Object(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }
}
impl Value {
    pub(crate) fn is_identical_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(value), Self::Float(other_value)) =>
                value.to_bits() == other_value.to_bits(),
            (Self::List(items), Self::List(other_items)) =>
                items.len() == other_items.len()
                    && items.iter().zip(other_items)
                        .all(|(item, other_item)| item.is_identical_to(other_item)),
            (Self::Object(fields), Self::Object(other_fields)) =>
                fields.len() == other_fields.len()
                    && fields.iter().all(|(name, value)| {
                        other_fields.get(name)
                            .is_some_and(|other_value| value.is_identical_to(other_value))
                    }),
            _ => self == other,
        }
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Renders the value using GraphQL literal syntax.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(value) => f.write_str(value),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(fields) => {
                f.write_str("{")?;
                for (idx, (name, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            },
            Self::String(value) => write_graphql_string(f, value),
        }
    }
}

fn write_graphql_string(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
) -> std::fmt::Result {
    f.write_str("\"")?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{8}' => f.write_str("\\b")?,
            '\u{c}' => f.write_str("\\f")?,
            ch if ch.is_control() => write!(f, "\\u{:04X}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    f.write_str("\"")
}
