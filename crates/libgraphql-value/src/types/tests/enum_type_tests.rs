use crate::ast::ValueNode;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::value::ResolvedValue;
use crate::value::Value;

fn size_enum() -> EnumType {
    EnumType::new("Size", [
        EnumValue::new("SMALL").with_value(1),
        EnumValue::new("LARGE").with_description("Big"),
    ])
}

#[test]
fn parses_declared_value_names() {
    let enum_type = size_enum();
    assert_eq!(
        enum_type.parse_literal(&ValueNode::Enum("SMALL".to_string())),
        Value::Int(1).into(),
    );
    assert_eq!(
        enum_type.parse_literal(&ValueNode::Enum("LARGE".to_string())),
        Value::Enum("LARGE".to_string()).into(),
    );
}

#[test]
fn rejects_other_literals() {
    let enum_type = size_enum();
    assert_eq!(
        enum_type.parse_literal(&ValueNode::Enum("MEDIUM".to_string())),
        ResolvedValue::Absent,
    );
    assert_eq!(
        enum_type.parse_literal(&ValueNode::String("SMALL".to_string())),
        ResolvedValue::Absent,
    );
    assert_eq!(enum_type.parse_literal(&ValueNode::Int(1)), ResolvedValue::Absent);
}

#[test]
fn values_keep_declaration_order() {
    let enum_type = size_enum();
    assert_eq!(
        enum_type.values().keys().collect::<Vec<_>>(),
        vec!["SMALL", "LARGE"],
    );
    assert_eq!(enum_type.values()["LARGE"].description(), Some("Big"));
    assert_eq!(enum_type.values()["SMALL"].value(), &Value::Int(1));
}
