use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRegistry;
use crate::types::UnionType;

/// Represents a named type registered in a [`TypeRegistry`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(inputobj_type) = self {
            Some(inputobj_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// Indicates if this type may be used as the type of an input field,
    /// argument, or variable (i.e. it is a scalar, enum, or input object).
    pub fn is_input_type(&self) -> bool {
        self.kind().is_input_kind()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = TypeRegistry;

    fn deref_name<'a>(
        registry: &'a TypeRegistry,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        registry.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}
impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(value)
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(value)
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(value)
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(value)
    }
}

pub type NamedGraphQLTypeRef = NamedRef<TypeRegistry, GraphQLType>;
