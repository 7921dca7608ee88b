pub mod common;
pub mod treesitter;

pub use common::{SOURCE_EXTENSION, is_source_file};
pub use treesitter::{PythonParser, SyntaxTree};
