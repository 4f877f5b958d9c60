mod enum_type;
mod graphql_type;
mod graphql_type_kind;
mod input_field;
mod input_object_type;
mod interface_type;
mod object_type;
mod scalar_type;
mod type_ref;
mod type_registry;
mod type_registry_builder;
mod union_type;

pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use graphql_type::GraphQLType;
pub use graphql_type::NamedGraphQLTypeRef;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_field::InputField;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ParseLiteralFn;
pub use scalar_type::ScalarType;
pub use type_ref::TypeRef;
pub use type_registry::TypeRegistry;
pub use type_registry_builder::TypeRegistryBuildError;
pub use type_registry_builder::TypeRegistryBuilder;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
