use crate::ast::ValueNode;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::TypeRef;
use crate::types::TypeRegistry;
use crate::value::ResolvedValue;
use crate::value::Value;
use crate::value::Variables;
use indexmap::IndexMap;
use std::collections::HashMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, ValueFromAstError>;

/// Produces a runtime value given a GraphQL value literal.
///
/// A [`TypeRef`] must be provided, which is used to interpret the different
/// literals:
///
/// | GraphQL literal | [`ResolvedValue`]                               |
/// | --------------- | ----------------------------------------------- |
/// | Input Object    | [`Value::Object`] (declared fields only)        |
/// | List            | [`Value::List`]                                 |
/// | Boolean         | per the scalar type (e.g. [`Value::Boolean`])   |
/// | String          | per the scalar type (e.g. [`Value::String`])    |
/// | Int / Float     | per the scalar type (e.g. [`Value::Int`])       |
/// | Enum Value      | the enum value's runtime [`Value`]              |
/// | `null`          | [`ResolvedValue::Null`]                         |
///
/// The literal is assumed to have been validated against `type_ref` already.
/// When it could not be (an omitted literal, an unset variable, a
/// non-object literal for an input object type, or a literal the scalar or
/// enum type cannot parse) the result is [`ResolvedValue::Absent`] rather
/// than an error.
pub fn value_from_ast(
    value_node: Option<&ValueNode>,
    type_ref: &TypeRef,
    registry: &TypeRegistry,
    variables: Option<&Variables>,
) -> Result<ResolvedValue> {
    ValueFromAst::new(registry, variables).resolve(value_node, type_ref)
}

/// Materializes literals against the types of a [`TypeRegistry`], with an
/// optional set of [`Variables`] substituted for variable references.
#[derive(Clone, Copy, Debug)]
pub struct ValueFromAst<'a> {
    registry: &'a TypeRegistry,
    variables: Option<&'a Variables>,
}
impl<'a> ValueFromAst<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        variables: Option<&'a Variables>,
    ) -> Self {
        Self {
            registry,
            variables,
        }
    }

    /// Materialize `value_node` as a value of `type_ref`.
    ///
    /// `None` stands for an omitted literal (e.g. an input object field left
    /// out of an object literal) and always yields [`ResolvedValue::Absent`],
    /// whereas a `null` literal always yields [`ResolvedValue::Null`].
    ///
    /// Fails only when a named type the literal must be interpreted as is
    /// undefined or is not an input type, which means the types themselves
    /// are malformed.
    pub fn resolve(
        &self,
        value_node: Option<&ValueNode>,
        type_ref: &TypeRef,
    ) -> Result<ResolvedValue> {
        match type_ref {
            // Note: The result is not checked to be non-null here. The value
            // is assumed to have already been validated against this type.
            TypeRef::NonNull(inner_type) =>
                self.resolve(value_node, inner_type),

            TypeRef::List(item_type) =>
                self.resolve_nullable(value_node, |value_node| {
                    self.resolve_list(value_node, item_type)
                }),

            TypeRef::Named(named_ref) =>
                self.resolve_nullable(value_node, |value_node| {
                    self.resolve_named(value_node, named_ref)
                }),
        }
    }

    fn resolve_input_object(
        &self,
        value_node: &ValueNode,
        inputobj_type: &InputObjectType,
    ) -> Result<ResolvedValue> {
        let ValueNode::Object(object_fields) = value_node else {
            return Ok(ResolvedValue::Absent);
        };

        // Later occurrences of a repeated field name overwrite earlier ones.
        let field_nodes: HashMap<&str, &ValueNode> =
            object_fields.iter()
                .map(|object_field| (object_field.name.as_str(), &object_field.value))
                .collect();

        let fields = inputobj_type.fields().values().map(|field| -> Result<_> {
            let field_value = self.resolve(
                field_nodes.get(field.name()).copied(),
                field.type_ref(),
            )?;

            // If no valid field value was provided, use the default value.
            let field_value =
                if field_value.is_absent() {
                    log::trace!(
                        "Using the default value of `{}.{}`.",
                        inputobj_type.name(),
                        field.name(),
                    );
                    field.default_value().clone()
                } else {
                    field_value
                };

            Ok((field.name().to_string(), field_value))
        }).collect::<Result<IndexMap<_, _>>>()?;

        Ok(Value::Object(fields).into())
    }

    fn resolve_list(
        &self,
        value_node: &ValueNode,
        item_type: &TypeRef,
    ) -> Result<ResolvedValue> {
        let items =
            if let ValueNode::List(item_nodes) = value_node {
                item_nodes.iter()
                    .map(|item_node| self.resolve(Some(item_node), item_type))
                    .collect::<Result<Vec<_>>>()?
            } else {
                log::trace!(
                    "Coercing a single {} literal to a list of `{item_type}`.",
                    value_node.kind(),
                );
                vec![self.resolve(Some(value_node), item_type)?]
            };

        Ok(Value::List(items).into())
    }

    fn resolve_named(
        &self,
        value_node: &ValueNode,
        named_ref: &NamedGraphQLTypeRef,
    ) -> Result<ResolvedValue> {
        let graphql_type = named_ref.deref(self.registry).map_err(|_| {
            ValueFromAstError::UndefinedType {
                type_name: named_ref.name().to_string(),
            }
        })?;

        let parsed = match graphql_type {
            GraphQLType::InputObject(inputobj_type) =>
                return self.resolve_input_object(value_node, inputobj_type),

            GraphQLType::Enum(enum_type) =>
                enum_type.parse_literal(value_node),

            GraphQLType::Scalar(scalar_type) =>
                scalar_type.parse_literal(value_node),

            GraphQLType::Interface(_)
                | GraphQLType::Object(_)
                | GraphQLType::Union(_) => {
                log::debug!(
                    "Attempted to materialize a {} literal as the non-input \
                    type `{}`.",
                    value_node.kind(),
                    graphql_type.name(),
                );
                return Err(ValueFromAstError::NotAnInputType {
                    type_kind: graphql_type.kind(),
                    type_name: graphql_type.name().to_string(),
                });
            },
        };

        // A leaf type that could not parse the literal yields no value.
        Ok(if parsed.is_nullish() {
            ResolvedValue::Absent
        } else {
            parsed
        })
    }

    /// Handles the cases shared by every nullable type: an omitted literal,
    /// a `null` literal, and a variable reference. Any other literal is
    /// handed to `resolve_fn`.
    fn resolve_nullable(
        &self,
        value_node: Option<&ValueNode>,
        resolve_fn: impl FnOnce(&ValueNode) -> Result<ResolvedValue>,
    ) -> Result<ResolvedValue> {
        match value_node {
            // When there is no literal, then there is also no value.
            // Importantly, this is different from the value null.
            None => Ok(ResolvedValue::Absent),

            Some(ValueNode::Null) => Ok(ResolvedValue::Null),

            // Note: The variable's value is not checked against the expected
            // type here. Variable usages are assumed to have been validated.
            Some(ValueNode::Variable(var_name)) => Ok(
                self.variables
                    .and_then(|vars| vars.get(var_name))
                    .cloned()
                    .unwrap_or(ResolvedValue::Absent)
            ),

            Some(value_node) => resolve_fn(value_node),
        }
    }
}

/// Raised when the types a literal is materialized against are malformed.
/// These indicate a problem with the types, never with the literal.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueFromAstError {
    #[error(
        "Literals can only be materialized as input types, but `{type_name}` \
        is of the non-input kind `{type_kind}`"
    )]
    NotAnInputType {
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error("Literal refers to the type `{type_name}`, which is not defined")]
    UndefinedType {
        type_name: String,
    },
}
