use thiserror::Error;

type Result<T> = std::result::Result<T, LiteralParseError>;

pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Type = graphql_parser::query::Type<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub use graphql_parser::schema::ParseError;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
    pub type EnumTypeExtension = graphql_parser::schema::EnumTypeExtension<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
    pub type InputObjectTypeExtension = graphql_parser::schema::InputObjectTypeExtension<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

/// A parsed GraphQL value literal such as `42`, `{x: 1}`, `$var`, or `null`.
///
/// Unlike [`query::Value`], [`ValueNode::Object`] preserves the source order
/// of its fields and permits a field name to appear more than once.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ValueNode {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<ValueNode>),
    Null,
    Object(Vec<ObjectField>),
    String(String),
    Variable(String),
}
impl ValueNode {
    /// Convert a `graphql_parser` value into a [`ValueNode`].
    ///
    /// `graphql_parser` stores object literals in a `BTreeMap`, so the
    /// resulting [`ValueNode::Object`] lists fields sorted by name and any
    /// repeated field name has already been collapsed by the parser.
    pub fn from_ast(ast_value: &query::Value) -> Result<Self> {
        Ok(match ast_value {
            query::Value::Variable(var_name) =>
                ValueNode::Variable(var_name.clone()),

            query::Value::Int(number) =>
                ValueNode::Int(
                    number.as_i64().ok_or(LiteralParseError::IntLiteralOutOfRange)?,
                ),

            query::Value::Float(value) if value.is_finite() =>
                ValueNode::Float(*value),

            query::Value::Float(_) =>
                return Err(LiteralParseError::FloatLiteralOutOfRange),

            query::Value::String(value) =>
                ValueNode::String(value.clone()),

            query::Value::Boolean(value) =>
                ValueNode::Boolean(*value),

            query::Value::Null =>
                ValueNode::Null,

            query::Value::Enum(value) =>
                ValueNode::Enum(value.clone()),

            query::Value::List(values) =>
                ValueNode::List(
                    values.iter()
                        .map(ValueNode::from_ast)
                        .collect::<Result<Vec<_>>>()?,
                ),

            query::Value::Object(entries) =>
                ValueNode::Object(
                    entries.iter()
                        .map(|(name, ast_value)| Ok(ObjectField {
                            name: name.clone(),
                            value: ValueNode::from_ast(ast_value)?,
                        }))
                        .collect::<Result<Vec<_>>>()?,
                ),
        })
    }

    /// The [`ValueNodeKind`] discriminator of this node.
    pub fn kind(&self) -> ValueNodeKind {
        match self {
            Self::Boolean(_) => ValueNodeKind::Boolean,
            Self::Enum(_) => ValueNodeKind::Enum,
            Self::Float(_) => ValueNodeKind::Float,
            Self::Int(_) => ValueNodeKind::Int,
            Self::List(_) => ValueNodeKind::List,
            Self::Null => ValueNodeKind::Null,
            Self::Object(_) => ValueNodeKind::Object,
            Self::String(_) => ValueNodeKind::String,
            Self::Variable(_) => ValueNodeKind::Variable,
        }
    }

    /// Build a [`ValueNode::Object`] from `(name, value)` pairs, keeping their
    /// order (and any repeated names) as given.
    pub fn object<S: Into<String>>(
        fields: impl IntoIterator<Item = (S, ValueNode)>,
    ) -> Self {
        Self::Object(
            fields.into_iter()
                .map(|(name, value)| ObjectField::new(name, value))
                .collect(),
        )
    }

    /// Parse a standalone GraphQL value literal (e.g. `{x: 1, y: $y}`).
    /// Variable references are permitted.
    pub fn parse(src: &str) -> Result<Self> {
        let document = parse_query_document(
            src,
            format!("{{ f(v: {src}) }}").as_str(),
        )?;

        let mut field = into_single_field(document)
            .filter(|field| {
                field.alias.is_none()
                    && field.directives.is_empty()
                    && field.selection_set.items.is_empty()
            })
            .ok_or_else(|| LiteralParseError::NotASingleValue {
                src: src.to_string(),
            })?;

        match (field.arguments.pop(), field.arguments.is_empty()) {
            (Some((_, ast_value)), true) => Self::from_ast(&ast_value),
            _ => Err(LiteralParseError::NotASingleValue {
                src: src.to_string(),
            }),
        }
    }
}

/// A single `name: value` entry of an object literal.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: String,
    pub value: ValueNode,
}
impl ObjectField {
    pub fn new(name: impl Into<String>, value: ValueNode) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Similar to [`ValueNode`] except without the literal's payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueNodeKind {
    Boolean,
    Enum,
    Float,
    Int,
    List,
    Null,
    Object,
    String,
    Variable,
}
impl ValueNodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Object => "Object",
            Self::String => "String",
            Self::Variable => "Variable",
        }
    }
}
impl std::fmt::Display for ValueNodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LiteralParseError {
    #[error("Float literal does not fit in a finite 64-bit float")]
    FloatLiteralOutOfRange,

    #[error("Integer literal does not fit in a 64-bit signed integer")]
    IntLiteralOutOfRange,

    #[error("Expected `{src}` to be exactly one GraphQL type reference")]
    NotASingleTypeRef {
        src: String,
    },

    #[error("Expected `{src}` to be exactly one GraphQL value literal")]
    NotASingleValue {
        src: String,
    },

    #[error("Failed to parse `{src}`: {err}")]
    SyntaxError {
        src: String,
        err: String,
    },
}

/// Parse `wrapped_src` (a document synthesized around the user-provided
/// `src`) as an executable document.
pub(crate) fn parse_query_document(
    src: &str,
    wrapped_src: &str,
) -> Result<query::Document> {
    Ok(
        graphql_parser::query::parse_query::<String>(wrapped_src)
            .map_err(|err| LiteralParseError::SyntaxError {
                src: src.to_string(),
                err: err.to_string(),
            })?
            .into_static()
    )
}

/// Extract the only operation definition of `document`.
pub(crate) fn into_single_operation(
    document: query::Document,
) -> Option<query::OperationDefinition> {
    let [query::Definition::Operation(operation)] =
        <[query::Definition; 1]>::try_from(document.definitions).ok()? else {
        return None;
    };
    Some(operation)
}

/// Extract the only field selected by the only operation of `document`.
fn into_single_field(document: query::Document) -> Option<query::Field> {
    let selection_set = match into_single_operation(document)? {
        query::OperationDefinition::SelectionSet(selection_set) => selection_set,
        query::OperationDefinition::Query(query) => query.selection_set,
        _ => return None,
    };
    let [query::Selection::Field(field)] =
        <[query::Selection; 1]>::try_from(selection_set.items).ok()? else {
        return None;
    };
    Some(field)
}
