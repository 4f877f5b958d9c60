use crate::ast::LiteralParseError;
use crate::ast::ValueNode;
use crate::loc;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::TypeRef;
use crate::types::TypeRegistry;
use crate::types::TypeRegistryBuildError;
use crate::types::TypeRegistryBuilder;
use crate::value::ResolvedValue;
use crate::value::Value;
use crate::ReadContentError;
use crate::ValueFromAstError;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

fn build_from_str(schema_src: &str) -> Result<TypeRegistry> {
    TypeRegistryBuilder::new()
        .load_str(None, schema_src)?
        .build()
}

fn default_value<'a>(
    registry: &'a TypeRegistry,
    type_name: &str,
    field_name: &str,
) -> &'a ResolvedValue {
    registry.get(type_name)
        .and_then(GraphQLType::as_input_object)
        .and_then(|inputobj_type| inputobj_type.field(field_name))
        .map(InputField::default_value)
        .unwrap()
}

fn object<const N: usize>(fields: [(&str, ResolvedValue); N]) -> ResolvedValue {
    Value::Object(
        fields.into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    ).into()
}

mod basics {
    use super::*;

    #[test]
    fn builtin_scalars_are_preloaded() -> Result<()> {
        let registry = TypeRegistryBuilder::new().build()?;
        assert_eq!(
            registry.types().keys().collect::<Vec<_>>(),
            vec!["Boolean", "Float", "ID", "Int", "String"],
        );
        Ok(())
    }

    #[test]
    fn load_every_kind_of_type() -> Result<()> {
        let registry = build_from_str(concat!(
            "\"The primary colors\"\n",
            "enum Color { RED GREEN BLUE }\n",
            "input Point { x: Float, y: Float }\n",
            "interface Node { id: ID! }\n",
            "type Query implements Node { id: ID! }\n",
            "scalar DateTime\n",
            "union SearchResult = Query\n",
            "schema { query: Query }\n",
            "directive @cached on FIELD_DEFINITION\n",
        ))?;

        assert_eq!(registry.len(), 11);
        let kinds: Vec<GraphQLTypeKind> = ["Color", "Point", "Node", "Query", "DateTime", "SearchResult"]
            .iter()
            .map(|name| registry.get(name).unwrap().kind())
            .collect();
        assert_eq!(kinds, [
            GraphQLTypeKind::Enum,
            GraphQLTypeKind::InputObject,
            GraphQLTypeKind::Interface,
            GraphQLTypeKind::Object,
            GraphQLTypeKind::Scalar,
            GraphQLTypeKind::Union,
        ]);

        let color_type = registry.get("Color").and_then(GraphQLType::as_enum).unwrap();
        assert_eq!(color_type.description(), Some("The primary colors"));
        assert_eq!(
            color_type.values().keys().collect::<Vec<_>>(),
            vec!["RED", "GREEN", "BLUE"],
        );
        assert_eq!(
            registry.get("Point").unwrap().def_location(),
            &loc::SchemaDefLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(PathBuf::from("str://0")),
                line: 3,
            }),
        );
        Ok(())
    }

    #[test]
    fn load_multiple_strs() -> Result<()> {
        let registry = TypeRegistryBuilder::new()
            .load_str(None, "input A { b: B }")?
            .load_str(None, "input B { a: A }")?
            .build()?;

        let b_type = registry.get("B").unwrap();
        assert_eq!(
            b_type.def_location(),
            &loc::SchemaDefLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(PathBuf::from("str://1")),
                line: 1,
            }),
        );
        Ok(())
    }

    #[test]
    fn mix_loaded_and_programmatic_types() -> Result<()> {
        let registry = TypeRegistryBuilder::new()
            .add_type(InputObjectType::new("Range", [
                InputField::new("min", TypeRef::named("Int")),
                InputField::new("max", TypeRef::named("Int"))
                    .with_default_value(Value::Int(100)),
            ]))?
            .load_str(None, "input Query { range: Range = {min: 1} }")?
            .build()?;

        assert_eq!(
            default_value(&registry, "Query", "range"),
            &object([
                ("min", Value::Int(1).into()),
                ("max", Value::Int(100).into()),
            ]),
        );
        Ok(())
    }

    #[test]
    fn invalid_schema_syntax() {
        let result = TypeRegistryBuilder::new().load_str(None, "input A {");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0"),
        ));
    }

    #[test]
    fn missing_schema_file() {
        let result = TypeRegistryBuilder::new()
            .load_file("/this/path/does/not/exist.graphql");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::SchemaFileReadError(err))
                if matches!(*err, ReadContentError::PathIsNotAFile(_)),
        ));
    }

    #[test]
    fn load_schema_files() -> Result<()> {
        let dir = std::env::temp_dir().join(format!(
            "libgraphql-value-load-files-{}",
            std::process::id(),
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let point_path = dir.join("point.graphql");
        let invalid_path = dir.join("invalid.graphql");
        std::fs::write(&point_path, "input Point { x: Int = 0 }").unwrap();
        std::fs::write(&invalid_path, [0x69, 0x6e, 0xff, 0xfe]).unwrap();

        let registry = TypeRegistryBuilder::new()
            .load_files(vec![&point_path])?
            .build()?;
        assert_eq!(
            registry.get("Point").unwrap().def_location(),
            &loc::SchemaDefLocation::Schema(loc::FilePosition {
                col: 1,
                file: Some(point_path.clone()),
                line: 1,
            }),
        );

        let result = TypeRegistryBuilder::new().load_file(&invalid_path);
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::SchemaFileReadError(err))
                if matches!(*err, ReadContentError::FileDecodeError { .. })
                    && err.file_path() == invalid_path,
        ));
        Ok(())
    }
}

mod default_values {
    use super::*;

    #[test]
    fn defaults_are_materialized_by_type() -> Result<()> {
        let registry = build_from_str(concat!(
            "enum Color { RED GREEN }\n",
            "input Style {\n",
            "  color: Color = GREEN\n",
            "  tags: [String] = \"solo\"\n",
            "  label: String = null\n",
            "  opacity: Float = 1\n",
            "  plain: Int\n",
            "}\n",
        ))?;

        assert_eq!(
            default_value(&registry, "Style", "color"),
            &Value::Enum("GREEN".to_string()).into(),
        );
        assert_eq!(
            default_value(&registry, "Style", "tags"),
            &Value::List(vec![Value::from("solo").into()]).into(),
        );
        assert_eq!(default_value(&registry, "Style", "label"), &ResolvedValue::Null);
        assert_eq!(default_value(&registry, "Style", "opacity"), &Value::Float(1.0).into());
        assert_eq!(default_value(&registry, "Style", "plain"), &ResolvedValue::Absent);
        Ok(())
    }

    #[test]
    fn defaults_depending_on_other_defaults() -> Result<()> {
        // `Rect` is declared before `Point`, and `Point.z` is only added by
        // a later extension.
        let registry = build_from_str(concat!(
            "input Rect { topLeft: Point = {}, bottomRight: Point = {x: 10, y: 10} }\n",
            "input Point { x: Int = 0, y: Int = 0 }\n",
            "extend input Point { z: Int = -1 }\n",
        ))?;

        let point = |x, y| object([
            ("x", Value::Int(x).into()),
            ("y", Value::Int(y).into()),
            ("z", Value::Int(-1).into()),
        ]);
        assert_eq!(default_value(&registry, "Rect", "topLeft"), &point(0, 0));
        assert_eq!(default_value(&registry, "Rect", "bottomRight"), &point(10, 10));
        Ok(())
    }

    #[test]
    fn invalid_default_is_absent() -> Result<()> {
        let registry = build_from_str("input A { n: Int = \"five\" }")?;
        assert_eq!(default_value(&registry, "A", "n"), &ResolvedValue::Absent);
        Ok(())
    }

    #[test]
    fn circular_defaults() {
        let result = build_from_str(concat!(
            "input A { b: B = {} }\n",
            "input B { a: A = {} }\n",
        ));
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::CircularDefaultValue { .. }),
        ));
    }

    #[test]
    fn self_referential_type_without_circular_default() -> Result<()> {
        let registry = build_from_str(
            "input Filter { not: Filter, limit: Int = 10, and: [Filter] = [] }",
        )?;
        assert_eq!(
            default_value(&registry, "Filter", "and"),
            &Value::List(vec![]).into(),
        );
        Ok(())
    }

    #[test]
    fn default_of_output_typed_field() {
        let result = build_from_str(concat!(
            "type Q { f: Int }\n",
            "input B { q: Q = {} }\n",
        ));
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::InvalidInputFieldWithOutputType { .. }),
        ));
    }

    #[test]
    fn invalid_default_value_message() {
        let err = TypeRegistryBuildError::InvalidDefaultValue {
            err: ValueFromAstError::UndefinedType {
                type_name: "Missing".to_string(),
            },
            field_name: "f".to_string(),
            parent_type_name: "A".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to materialize the default value of `A.f`: Literal refers \
            to the type `Missing`, which is not defined",
        );
    }
}

mod extensions {
    use super::*;

    #[test]
    fn extend_enum_and_input() -> Result<()> {
        let registry = build_from_str(concat!(
            "extend enum Color { BLUE }\n",
            "enum Color { RED }\n",
            "input P { a: Int }\n",
            "extend input P { b: Color = BLUE }\n",
        ))?;

        let color_type = registry.get("Color").and_then(GraphQLType::as_enum).unwrap();
        assert_eq!(
            color_type.values().keys().collect::<Vec<_>>(),
            vec!["RED", "BLUE"],
        );
        assert_eq!(
            default_value(&registry, "P", "b"),
            &Value::Enum("BLUE".to_string()).into(),
        );
        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() {
        let result = build_from_str("extend input Nope { a: Int }");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Nope",
        ));
    }

    #[test]
    fn extension_of_wrong_kind() {
        let result = build_from_str(concat!(
            "enum E { A }\n",
            "extend input E { a: Int }\n",
        ));
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::InvalidExtensionType {
                actual_kind: GraphQLTypeKind::Enum,
                expected_kind: GraphQLTypeKind::InputObject,
                ..
            }),
        ));
    }

    #[test]
    fn output_type_extensions_are_skipped() -> Result<()> {
        let registry = build_from_str(concat!(
            "type Query { a: Int }\n",
            "extend type Query { b: Int }\n",
            "extend type Nope { c: Int }\n",
        ))?;
        assert!(registry.contains("Query"));
        assert!(!registry.contains("Nope"));
        Ok(())
    }
}

mod validation {
    use super::*;

    #[test]
    fn duplicate_type() {
        let result = TypeRegistryBuilder::new()
            .load_str(None, "input A { a: Int }")
            .and_then(|builder| builder.load_str(None, "enum A { X }"));
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "A",
        ));
    }

    #[test]
    fn redefined_builtin_scalar() {
        let result = build_from_str("scalar Int");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::DuplicateTypeDefinition {
                location1: loc::SchemaDefLocation::GraphQLBuiltIn,
                ..
            }),
        ));
    }

    #[test]
    fn duplicate_input_field() {
        let result = build_from_str("input A { a: Int, a: String }");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::DuplicateInputFieldDefinition { field_name, .. })
                if field_name == "a",
        ));
    }

    #[test]
    fn duplicate_enum_value() {
        let result = build_from_str("enum E { A B A }");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::DuplicateEnumValueDefinition { value_name, .. })
                if value_name == "A",
        ));
    }

    #[test]
    fn undefined_input_field_type() {
        let result = build_from_str("input A { b: [Missing!] }");
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::UndefinedInputFieldType { undefined_type_name, .. })
                if undefined_type_name == "Missing",
        ));
    }

    #[test]
    fn input_field_with_output_type() {
        let result = build_from_str(concat!(
            "interface Node { id: ID }\n",
            "input A { node: Node }\n",
        ));
        assert!(matches!(
            result,
            Err(TypeRegistryBuildError::InvalidInputFieldWithOutputType { invalid_type_name, .. })
                if invalid_type_name == "Node",
        ));
    }

    #[test]
    fn infinite_float_default() {
        let result = build_from_str("input A { f: Float = 1e400 }");
        assert_eq!(
            result,
            Err(TypeRegistryBuildError::InvalidDefaultValueLiteral {
                err: LiteralParseError::FloatLiteralOutOfRange,
                field_name: "f".to_string(),
                parent_type_name: "A".to_string(),
            }),
        );
    }
}

mod scalar_parsers {
    use super::*;

    fn parse_upper(value_node: &ValueNode) -> ResolvedValue {
        match value_node {
            ValueNode::String(value) => Value::String(value.to_uppercase()).into(),
            _ => ResolvedValue::Absent,
        }
    }

    #[test]
    fn custom_scalar_defaults_to_untyped_conversion() -> Result<()> {
        let registry = build_from_str("scalar JSON\ninput A { data: JSON = {list: [1, B]} }")?;
        assert_eq!(
            default_value(&registry, "A", "data"),
            &object([
                ("list", Value::List(vec![
                    Value::Int(1).into(),
                    Value::Enum("B".to_string()).into(),
                ]).into()),
            ]),
        );
        Ok(())
    }

    #[test]
    fn injected_scalar_parser() -> Result<()> {
        let registry = TypeRegistryBuilder::new()
            .with_scalar_parser("Upper", parse_upper)
            .load_str(None, "scalar Upper\ninput A { u: Upper = \"abc\", v: Upper = 1 }")?
            .build()?;

        assert_eq!(default_value(&registry, "A", "u"), &Value::from("ABC").into());
        assert_eq!(default_value(&registry, "A", "v"), &ResolvedValue::Absent);
        Ok(())
    }

    #[test]
    fn nan_default_values_settle() -> Result<()> {
        let registry = TypeRegistryBuilder::new()
            .with_scalar_parser("Weird", |_| Value::Float(f64::NAN).into())
            .load_str(None, "scalar Weird\ninput X { w: Weird = 1, ws: [Weird] = [1, 2] }")?
            .build()?;

        assert!(matches!(
            default_value(&registry, "X", "w"),
            ResolvedValue::Value(Value::Float(value)) if value.is_nan(),
        ));
        let Some(items) = default_value(&registry, "X", "ws").as_value()
            .and_then(Value::as_list) else {
            panic!("Expected a list default for `X.ws`");
        };
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| matches!(
            item,
            ResolvedValue::Value(Value::Float(value)) if value.is_nan(),
        )));
        Ok(())
    }

    #[test]
    fn scalar_parser_for_undefined_scalar() {
        let result = TypeRegistryBuilder::new()
            .with_scalar_parser("Upper", parse_upper)
            .build();
        assert_eq!(
            result,
            Err(TypeRegistryBuildError::UndefinedScalarParserTarget {
                scalar_name: "Upper".to_string(),
            }),
        );
    }

    #[test]
    fn scalar_parser_for_builtin_scalar() {
        let result = TypeRegistryBuilder::new()
            .with_scalar_parser("String", parse_upper)
            .build();
        assert_eq!(
            result,
            Err(TypeRegistryBuildError::UndefinedScalarParserTarget {
                scalar_name: "String".to_string(),
            }),
        );
    }
}
