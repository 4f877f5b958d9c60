use crate::ast;
use crate::ast::LiteralParseError;
use crate::types::NamedGraphQLTypeRef;

/// Represents the expected type of a value position, such as the declared
/// type of an [`InputField`](crate::types::InputField) or a variable.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef {
    List(Box<TypeRef>),
    Named(NamedGraphQLTypeRef),
    NonNull(Box<TypeRef>),
}
impl TypeRef {
    pub fn list(item_type: TypeRef) -> Self {
        Self::List(Box::new(item_type))
    }

    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(NamedGraphQLTypeRef::new(name))
    }

    pub fn non_null(inner_type: TypeRef) -> Self {
        Self::NonNull(Box::new(inner_type))
    }

    pub fn from_ast_type(ast_type: &ast::query::Type) -> Self {
        match ast_type {
            ast::query::Type::ListType(inner) =>
                Self::list(Self::from_ast_type(inner)),

            ast::query::Type::NamedType(name) =>
                Self::named(name),

            ast::query::Type::NonNullType(inner) =>
                Self::non_null(Self::from_ast_type(inner)),
        }
    }

    /// Parse a standalone type reference such as `[Point!]!`.
    pub fn parse(src: &str) -> Result<Self, LiteralParseError> {
        let not_a_single_type_ref = || LiteralParseError::NotASingleTypeRef {
            src: src.to_string(),
        };

        let document = ast::parse_query_document(
            src,
            format!("query ($v: {src}) {{ f }}").as_str(),
        )?;

        let Some(ast::query::OperationDefinition::Query(query)) =
            ast::into_single_operation(document) else {
            return Err(not_a_single_type_ref());
        };
        if !query.directives.is_empty() || query.selection_set.items.len() != 1 {
            return Err(not_a_single_type_ref());
        }

        let [var_def] = <[_; 1]>::try_from(query.variable_definitions)
            .map_err(|_| not_a_single_type_ref())?;
        if var_def.default_value.is_some() {
            return Err(not_a_single_type_ref());
        }

        Ok(Self::from_ast_type(&var_def.var_type))
    }

    /// Recursively unwrap this [`TypeRef`] and return the inner-most
    /// [`NamedGraphQLTypeRef`] from it.
    pub fn innermost_named_type_ref(&self) -> &NamedGraphQLTypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) =>
                inner.innermost_named_type_ref(),
            Self::Named(named_ref) => named_ref,
        }
    }

    /// Indicates if this [`TypeRef`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(item_type) => write!(f, "[{item_type}]"),
            Self::Named(named_ref) => f.write_str(named_ref.name()),
            Self::NonNull(inner_type) => write!(f, "{inner_type}!"),
        }
    }
}
