use crate::error::Result;
use log::trace;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator, Tree};

pub mod bindings;
pub mod queries;

/// A parsed source file. Keeps the text alongside the tree because node
/// spans are only byte offsets into it.
pub struct SyntaxTree {
    tree: Tree,
    source: String,
}

impl SyntaxTree {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn language(&self) -> Language {
        bindings::python_language()
    }
}

impl std::fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("root", &self.tree.root_node().kind())
            .field("source_len", &self.source.len())
            .finish()
    }
}

pub struct PythonParser {
    parser: Parser,
    legacy_statements: Query,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let language = bindings::python_language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let legacy_statements = Query::new(&language, queries::python::LEGACY_STATEMENT_QUERY)?;

        Ok(Self {
            parser,
            legacy_statements,
        })
    }

    /// Parses `source` into a tree. Returns `None` when the text is not
    /// valid Python 3: tree-sitter had to recover from a syntax error, or
    /// the file uses a Python 2 `print`/`exec` statement.
    pub fn parse(&mut self, source: String) -> Option<SyntaxTree> {
        let tree = self.parser.parse(source.as_bytes(), None)?;

        if tree.root_node().has_error() {
            trace!("Source contains syntax errors, discarding tree");
            return None;
        }

        if self.has_legacy_statement(&tree, &source) {
            trace!("Source uses Python 2 statements, discarding tree");
            return None;
        }

        Some(SyntaxTree { tree, source })
    }

    fn has_legacy_statement(&self, tree: &Tree, source: &str) -> bool {
        let mut query_cursor = QueryCursor::new();
        let mut matches =
            query_cursor.matches(&self.legacy_statements, tree.root_node(), source.as_bytes());
        matches.next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_source() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse("def run():\n    return 1\n".to_string()).unwrap();
        assert_eq!(tree.root_node().kind(), "module");
        assert!(tree.source().starts_with("def run"));
    }

    #[test]
    fn rejects_malformed_source() {
        let mut parser = PythonParser::new().unwrap();
        assert!(parser.parse("def broken(:\n    pass\n".to_string()).is_none());
    }

    #[test]
    fn rejects_python2_statements() {
        let mut parser = PythonParser::new().unwrap();
        assert!(parser.parse("print 'hello'\ndef get_x():\n    pass\n".to_string()).is_none());
        assert!(parser.parse("exec 'x = 1'\n".to_string()).is_none());

        let tree = parser.parse("print('hello')\n".to_string()).unwrap();
        assert_eq!(tree.root_node().kind(), "module");
    }

    #[test]
    fn empty_source_is_an_empty_module() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse(String::new()).unwrap();
        assert_eq!(tree.root_node().named_child_count(), 0);
    }
}
