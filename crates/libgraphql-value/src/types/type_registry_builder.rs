use crate::ast;
use crate::ast::LiteralParseError;
use crate::ast::ValueNode;
use crate::file_reader;
use crate::loc;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ParseLiteralFn;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::TypeRegistry;
use crate::types::UnionType;
use crate::types::scalar_type;
use crate::value::ResolvedValue;
use crate::value::Value;
use crate::ReadContentError;
use crate::ValueFromAst;
use crate::ValueFromAstError;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

/// A default value literal waiting to be materialized once every type is
/// known.
#[derive(Debug)]
struct PendingDefaultValue {
    field_name: String,
    literal: ValueNode,
    parent_type_name: String,
}

/// Utility for building a [`TypeRegistry`], either programmatically or by
/// loading schema documents.
#[derive(Debug)]
pub struct TypeRegistryBuilder {
    enum_extensions: Vec<(PathBuf, ast::schema::EnumTypeExtension)>,
    inputobject_extensions: Vec<(PathBuf, ast::schema::InputObjectTypeExtension)>,
    pending_default_values: Vec<PendingDefaultValue>,
    scalar_parsers: IndexMap<String, ParseLiteralFn>,
    str_load_counter: u16,
    types: IndexMap<String, GraphQLType>,
}
impl TypeRegistryBuilder {
    /// Creates a builder with the built-in scalar types already registered.
    pub fn new() -> Self {
        Self {
            enum_extensions: vec![],
            inputobject_extensions: vec![],
            pending_default_values: vec![],
            scalar_parsers: IndexMap::new(),
            str_load_counter: 0,
            types: ScalarType::builtins()
                .into_iter()
                .map(|scalar| (scalar.name.clone(), GraphQLType::Scalar(scalar)))
                .collect(),
        }
    }

    pub fn add_type(mut self, graphql_type: impl Into<GraphQLType>) -> Result<Self> {
        self.insert_type(graphql_type.into())?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<TypeRegistry> {
        self.apply_extensions()?;
        self.apply_scalar_parsers()?;
        self.check_input_field_types()?;

        let pending_default_values =
            std::mem::take(&mut self.pending_default_values);
        let mut registry = TypeRegistry { types: self.types };
        materialize_default_values(&mut registry, &pending_default_values)?;

        log::debug!("Built a type registry with {} types.", registry.len());
        Ok(registry)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| TypeRegistryBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    /// Load the type definitions (and `input`/`enum` type extensions) of a
    /// schema document. Schema and directive definitions, as well as
    /// extensions of output types and scalars, have no bearing on literal
    /// values and are skipped.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| TypeRegistryBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        log::debug!(
            "Loading {} definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Parse literals of the (custom) scalar named `scalar_name` with
    /// `parse_literal_fn` instead of converting them as-is.
    pub fn with_scalar_parser(
        mut self,
        scalar_name: impl Into<String>,
        parse_literal_fn: ParseLiteralFn,
    ) -> Self {
        self.scalar_parsers.insert(scalar_name.into(), parse_literal_fn);
        self
    }

    fn apply_extensions(&mut self) -> Result<()> {
        for (file_path, ext) in std::mem::take(&mut self.enum_extensions) {
            let location = loc::FilePosition::from_pos(Some(&file_path), ext.position);
            let enum_type = match self.types.get_mut(ext.name.as_str()) {
                Some(GraphQLType::Enum(enum_type)) => enum_type,
                other => return Err(extension_target_error(
                    ext.name,
                    GraphQLTypeKind::Enum,
                    other.map(|t| t.kind()),
                    location,
                )),
            };
            for ast_value in ext.values {
                insert_enum_value(enum_type, enum_value_from_ast(&file_path, ast_value))?;
            }
        }

        for (file_path, ext) in std::mem::take(&mut self.inputobject_extensions) {
            let location = loc::FilePosition::from_pos(Some(&file_path), ext.position);
            let inputobj_type = match self.types.get_mut(ext.name.as_str()) {
                Some(GraphQLType::InputObject(inputobj_type)) => inputobj_type,
                other => return Err(extension_target_error(
                    ext.name,
                    GraphQLTypeKind::InputObject,
                    other.map(|t| t.kind()),
                    location,
                )),
            };
            for input_value in ext.fields {
                let field = input_field_from_ast(
                    &file_path,
                    inputobj_type.name.as_str(),
                    input_value,
                    &mut self.pending_default_values,
                )?;
                insert_input_field(inputobj_type, field)?;
            }
        }

        Ok(())
    }

    fn apply_scalar_parsers(&mut self) -> Result<()> {
        for (scalar_name, parse_literal_fn) in self.scalar_parsers.drain(..) {
            match self.types.get_mut(scalar_name.as_str()) {
                Some(GraphQLType::Scalar(scalar_type)) if !scalar_type.is_builtin() =>
                    scalar_type.parse_literal_fn = parse_literal_fn,
                _ => return Err(TypeRegistryBuildError::UndefinedScalarParserTarget {
                    scalar_name,
                }),
            }
        }
        Ok(())
    }

    fn check_input_field_types(&self) -> Result<()> {
        let inputobj_types = self.types.values().filter_map(GraphQLType::as_input_object);
        for inputobj_type in inputobj_types {
            for field in inputobj_type.fields.values() {
                let field_type_name = field.type_ref.innermost_named_type_ref().name();
                match self.types.get(field_type_name) {
                    Some(field_type) if field_type.is_input_type() => (),

                    Some(_) => return Err(
                        TypeRegistryBuildError::InvalidInputFieldWithOutputType {
                            def_location: field.def_location.clone(),
                            field_name: field.name.clone(),
                            invalid_type_name: field_type_name.to_string(),
                            parent_type_name: inputobj_type.name.clone(),
                        }
                    ),

                    None => return Err(
                        TypeRegistryBuildError::UndefinedInputFieldType {
                            def_location: field.def_location.clone(),
                            field_name: field.name.clone(),
                            parent_type_name: inputobj_type.name.clone(),
                            undefined_type_name: field_type_name.to_string(),
                        }
                    ),
                }
            }
        }
        Ok(())
    }

    fn insert_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        if let Some(existing_type) = self.types.get(graphql_type.name()) {
            return Err(TypeRegistryBuildError::DuplicateTypeDefinition {
                type_name: graphql_type.name().to_string(),
                location1: existing_type.def_location().clone(),
                location2: graphql_type.def_location().clone(),
            });
        }
        self.types.insert(graphql_type.name().to_string(), graphql_type);
        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        use ast::schema::TypeExtension;
        match def {
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),

            Definition::TypeExtension(TypeExtension::Enum(ext)) => {
                self.enum_extensions.push((file_path.to_path_buf(), ext));
                Ok(())
            },

            Definition::TypeExtension(TypeExtension::InputObject(ext)) => {
                self.inputobject_extensions.push((file_path.to_path_buf(), ext));
                Ok(())
            },

            Definition::TypeExtension(_)
                | Definition::SchemaDefinition(_)
                | Definition::DirectiveDefinition(_) => {
                log::trace!("Skipping a definition with no input types in {file_path:?}.");
                Ok(())
            },
        }
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let graphql_type = match type_def {
            TypeDefinition::Enum(enum_def) => {
                let mut enum_type = EnumType {
                    def_location: schema_def_location(file_path, enum_def.position),
                    description: enum_def.description,
                    name: enum_def.name,
                    values: IndexMap::new(),
                };
                for ast_value in enum_def.values {
                    insert_enum_value(
                        &mut enum_type,
                        enum_value_from_ast(file_path, ast_value),
                    )?;
                }
                GraphQLType::Enum(enum_type)
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let mut inputobj_type = InputObjectType {
                    def_location: schema_def_location(file_path, inputobj_def.position),
                    description: inputobj_def.description,
                    fields: IndexMap::new(),
                    name: inputobj_def.name,
                };
                for input_value in inputobj_def.fields {
                    let field = input_field_from_ast(
                        file_path,
                        inputobj_type.name.as_str(),
                        input_value,
                        &mut self.pending_default_values,
                    )?;
                    insert_input_field(&mut inputobj_type, field)?;
                }
                GraphQLType::InputObject(inputobj_type)
            },

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType {
                    def_location: schema_def_location(file_path, iface_def.position),
                    description: iface_def.description,
                    name: iface_def.name,
                }),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType {
                    def_location: schema_def_location(file_path, obj_def.position),
                    description: obj_def.description,
                    name: obj_def.name,
                }),

            TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::Scalar(ScalarType {
                    def_location: schema_def_location(file_path, scalar_def.position),
                    description: scalar_def.description,
                    name: scalar_def.name,
                    parse_literal_fn: scalar_type::parse_untyped_literal,
                }),

            TypeDefinition::Union(union_def) =>
                GraphQLType::Union(UnionType {
                    def_location: schema_def_location(file_path, union_def.position),
                    description: union_def.description,
                    name: union_def.name,
                }),
        };

        self.insert_type(graphql_type)
    }
}
impl std::default::Default for TypeRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn enum_value_from_ast(
    file_path: &Path,
    ast_value: ast::schema::EnumValue,
) -> EnumValue {
    EnumValue {
        def_location: schema_def_location(file_path, ast_value.position),
        description: ast_value.description,
        value: Value::Enum(ast_value.name.clone()),
        name: ast_value.name,
    }
}

fn extension_target_error(
    type_name: String,
    expected_kind: GraphQLTypeKind,
    actual_kind: Option<GraphQLTypeKind>,
    location: loc::FilePosition,
) -> TypeRegistryBuildError {
    match actual_kind {
        Some(actual_kind) => TypeRegistryBuildError::InvalidExtensionType {
            actual_kind,
            expected_kind,
            location,
            type_name,
        },
        None => TypeRegistryBuildError::ExtensionOfUndefinedType {
            location,
            type_name,
        },
    }
}

fn input_field_from_ast(
    file_path: &Path,
    parent_type_name: &str,
    input_value: ast::schema::InputValue,
    pending_default_values: &mut Vec<PendingDefaultValue>,
) -> Result<InputField> {
    if let Some(ast_default) = &input_value.default_value {
        let literal = ValueNode::from_ast(ast_default)
            .map_err(|err| TypeRegistryBuildError::InvalidDefaultValueLiteral {
                err,
                field_name: input_value.name.clone(),
                parent_type_name: parent_type_name.to_string(),
            })?;
        pending_default_values.push(PendingDefaultValue {
            field_name: input_value.name.clone(),
            literal,
            parent_type_name: parent_type_name.to_string(),
        });
    }

    Ok(InputField {
        def_location: schema_def_location(file_path, input_value.position),
        default_value: ResolvedValue::Absent,
        description: input_value.description,
        name: input_value.name,
        type_ref: TypeRef::from_ast_type(&input_value.value_type),
    })
}

fn insert_enum_value(enum_type: &mut EnumType, enum_value: EnumValue) -> Result<()> {
    if enum_type.values.contains_key(enum_value.name.as_str()) {
        return Err(TypeRegistryBuildError::DuplicateEnumValueDefinition {
            enum_name: enum_type.name.clone(),
            location: enum_value.def_location,
            value_name: enum_value.name,
        });
    }
    enum_type.values.insert(enum_value.name.clone(), enum_value);
    Ok(())
}

fn insert_input_field(inputobj_type: &mut InputObjectType, field: InputField) -> Result<()> {
    if inputobj_type.fields.contains_key(field.name.as_str()) {
        return Err(TypeRegistryBuildError::DuplicateInputFieldDefinition {
            field_name: field.name,
            location: field.def_location,
            parent_type_name: inputobj_type.name.clone(),
        });
    }
    inputobj_type.fields.insert(field.name.clone(), field);
    Ok(())
}

fn input_field_mut<'a>(
    registry: &'a mut TypeRegistry,
    parent_type_name: &str,
    field_name: &str,
) -> Option<&'a mut InputField> {
    match registry.types.get_mut(parent_type_name) {
        Some(GraphQLType::InputObject(inputobj_type)) =>
            inputobj_type.fields.get_mut(field_name),
        _ => None,
    }
}

/// Materialize every default value literal against the finished registry.
///
/// A default can depend on the defaults of another input object type's
/// fields (e.g. `point: Point = {}` takes `Point`'s own defaults), so passes
/// are repeated until nothing changes. Each pass settles at least one more
/// link of any dependency chain, so `n` defaults need at most `n + 1` passes;
/// needing more means the defaults depend on each other in a cycle.
fn materialize_default_values(
    registry: &mut TypeRegistry,
    pending_default_values: &[PendingDefaultValue],
) -> Result<()> {
    let mut last_changed = None;
    for _ in 0..=pending_default_values.len() {
        last_changed = None;
        for pending in pending_default_values {
            let Some(field) = registry.get(pending.parent_type_name.as_str())
                .and_then(GraphQLType::as_input_object)
                .and_then(|inputobj_type| inputobj_type.field(pending.field_name.as_str()))
            else {
                continue;
            };

            let default_value = ValueFromAst::new(&*registry, None)
                .resolve(Some(&pending.literal), field.type_ref())
                .map_err(|err| TypeRegistryBuildError::InvalidDefaultValue {
                    err,
                    field_name: pending.field_name.clone(),
                    parent_type_name: pending.parent_type_name.clone(),
                })?;

            if let Some(field) = input_field_mut(
                registry,
                pending.parent_type_name.as_str(),
                pending.field_name.as_str(),
            ) && !field.default_value.is_identical_to(&default_value) {
                field.default_value = default_value;
                last_changed = Some(pending);
            }
        }

        if last_changed.is_none() {
            return Ok(());
        }
        log::trace!("Default values changed; running another pass.");
    }

    match last_changed {
        Some(pending) => Err(TypeRegistryBuildError::CircularDefaultValue {
            field_name: pending.field_name.clone(),
            parent_type_name: pending.parent_type_name.clone(),
        }),
        None => Ok(()),
    }
}

fn schema_def_location(
    file_path: &Path,
    pos: graphql_parser::Pos,
) -> loc::SchemaDefLocation {
    loc::FilePosition::from_pos(Some(file_path), pos).into()
}

#[derive(Debug, Error, PartialEq)]
pub enum TypeRegistryBuildError {
    #[error(
        "The default value of `{parent_type_name}.{field_name}` never settles: \
        input field default values depend on each other in a cycle"
    )]
    CircularDefaultValue {
        field_name: String,
        parent_type_name: String,
    },

    #[error("Enum value `{enum_name}.{value_name}` is defined more than once (at {location})")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        location: loc::SchemaDefLocation,
        value_name: String,
    },

    #[error("Input field `{parent_type_name}.{field_name}` is defined more than once (at {location})")]
    DuplicateInputFieldDefinition {
        field_name: String,
        location: loc::SchemaDefLocation,
        parent_type_name: String,
    },

    #[error("Type `{type_name}` is defined more than once (at {location1} and {location2})")]
    DuplicateTypeDefinition {
        type_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}` at {location}, but no such type is defined")]
    ExtensionOfUndefinedType {
        location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Failed to materialize the default value of \
        `{parent_type_name}.{field_name}`: {err}"
    )]
    InvalidDefaultValue {
        err: ValueFromAstError,
        field_name: String,
        parent_type_name: String,
    },

    #[error("Invalid default value literal for `{parent_type_name}.{field_name}`: {err}")]
    InvalidDefaultValueLiteral {
        err: LiteralParseError,
        field_name: String,
        parent_type_name: String,
    },

    #[error(
        "Attempted to extend `{type_name}` as an {expected_kind} type at \
        {location}, but it is defined as an {actual_kind} type"
    )]
    InvalidExtensionType {
        actual_kind: GraphQLTypeKind,
        expected_kind: GraphQLTypeKind,
        location: loc::FilePosition,
        type_name: String,
    },

    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is a non-input type."
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error("Error parsing schema file {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("{0}")]
    SchemaFileReadError(Box<ReadContentError>),

    #[error(
        "The `{parent_type_name}.{field_name}` input field is declared with \
        the `{undefined_type_name}` type, which is not defined."
    )]
    UndefinedInputFieldType {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        parent_type_name: String,
        undefined_type_name: String,
    },

    #[error(
        "A literal parser was provided for `{scalar_name}`, but no custom \
        scalar type with that name is defined"
    )]
    UndefinedScalarParserTarget {
        scalar_name: String,
    },
}
