mod enum_type_tests;
mod type_registry_builder_tests;
