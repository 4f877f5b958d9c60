use crate::ast::ValueNode;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::types::TypeRegistryBuilder;
use crate::value::ResolvedValue;
use crate::value::Variables;
use crate::ValueFromAst;
use crate::ValueFromAstError;
use indexmap::IndexMap;

/// The set of named types that [`TypeRef`]s are resolved against.
///
/// Build one with a [`TypeRegistryBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    pub(super) types: IndexMap<String, GraphQLType>,
}
impl TypeRegistry {
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::new()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// All registered types (built-in scalars first, then in the order they
    /// were added or loaded).
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Materialize `value_node` as a value of `type_ref`. See
    /// [`ValueFromAst::resolve`].
    pub fn value_from_ast(
        &self,
        value_node: Option<&ValueNode>,
        type_ref: &TypeRef,
        variables: Option<&Variables>,
    ) -> Result<ResolvedValue, ValueFromAstError> {
        ValueFromAst::new(self, variables).resolve(value_node, type_ref)
    }
}
