pub mod ast;
mod file_reader;
pub mod loc;
pub mod named_ref;
pub mod types;
pub mod value;
mod value_from_ast;

pub use file_reader::ReadContentError;
pub use value_from_ast::value_from_ast;
pub use value_from_ast::ValueFromAst;
pub use value_from_ast::ValueFromAstError;
