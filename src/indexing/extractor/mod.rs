mod common;
mod python;

use crate::error::Result;
use crate::parsers::SyntaxTree;
use crate::parsers::treesitter::bindings::python_language;
use crate::parsers::treesitter::queries::python as queries;
use log::trace;
use tree_sitter::{Node, Query};

pub use python::is_name_reference;

/// What a [`NameExtractor::extract`] call collects from a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Every identifier that reads or binds a variable-like name.
    AllNames,
    /// The lower-cased name of every synchronous function definition.
    FunctionNames,
}

/// Dunder-style names such as `__init__` are reserved by the language and
/// carry no naming-convention signal.
pub fn is_reserved_name(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

/// Pulls names out of syntax trees. Holds the compiled queries so one
/// extractor can serve every tree of a run.
#[derive(Debug)]
pub struct NameExtractor {
    function_query: Query,
}

impl NameExtractor {
    pub fn new() -> Result<Self> {
        let function_query = Query::new(&python_language(), queries::FUNCTION_NAME_QUERY)?;
        Ok(Self { function_query })
    }

    pub fn extract(&self, tree: &SyntaxTree, mode: ExtractionMode) -> Vec<String> {
        let names = match mode {
            ExtractionMode::AllNames => all_names(tree),
            ExtractionMode::FunctionNames => self.function_names(tree),
        };

        names
            .into_iter()
            .filter(|name| {
                let reserved = is_reserved_name(name);
                if reserved {
                    trace!("Skipping reserved name: {}", name);
                }
                !reserved
            })
            .collect()
    }

    fn function_names(&self, tree: &SyntaxTree) -> Vec<String> {
        common::execute_query(&self.function_query, tree, "name")
            .into_iter()
            .filter(|node| !node.parent().is_some_and(is_async_definition))
            .map(|node| common::get_node_text(node, tree.source()).to_lowercase())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

// `async def` parses as a function_definition with a leading `async` token.
fn is_async_definition(definition: Node) -> bool {
    let mut cursor = definition.walk();
    definition
        .children(&mut cursor)
        .any(|child| child.kind() == "async")
}

fn all_names(tree: &SyntaxTree) -> Vec<String> {
    let mut names = Vec::new();

    common::walk_preorder(tree, |node| {
        if is_name_reference(node) {
            let name = common::get_node_text(node, tree.source());
            if !name.is_empty() {
                names.push(name);
            }
        }
    });

    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexing::parse_source;

    fn names(source: &str, mode: ExtractionMode) -> Vec<String> {
        let tree = parse_source(source).unwrap().expect("test source must parse");
        NameExtractor::new().unwrap().extract(&tree, mode)
    }

    #[test]
    fn function_names_are_lower_cased_in_document_order() {
        let found = names(
            "def Fetch_User():\n    def inner():\n        pass\n\nclass Repo:\n    def save(self):\n        pass\n",
            ExtractionMode::FunctionNames,
        );
        assert_eq!(found, vec!["fetch_user", "inner", "save"]);
    }

    #[test]
    fn async_functions_are_not_function_definitions() {
        let found = names(
            "async def fetch_user():\n    pass\n\ndef save_user():\n    pass\n\nclass Repo:\n    async def load(self):\n        def helper():\n            pass\n",
            ExtractionMode::FunctionNames,
        );
        assert_eq!(found, vec!["save_user", "helper"]);
    }

    #[test]
    fn function_names_skip_dunder() {
        let found = names(
            "def __main__():\n    pass\n\ndef run():\n    pass\n\ndef __private():\n    pass\n",
            ExtractionMode::FunctionNames,
        );
        assert_eq!(found, vec!["run", "__private"]);
    }

    #[test]
    fn one_extractor_serves_many_trees() {
        let extractor = NameExtractor::new().unwrap();
        let first = parse_source("def get_a():\n    pass\n").unwrap().unwrap();
        let second = parse_source("def set_b():\n    pass\n").unwrap().unwrap();
        assert_eq!(extractor.extract(&first, ExtractionMode::FunctionNames), vec!["get_a"]);
        assert_eq!(extractor.extract(&second, ExtractionMode::FunctionNames), vec!["set_b"]);
        assert_eq!(extractor.extract(&first, ExtractionMode::FunctionNames), vec!["get_a"]);
    }

    #[test]
    fn all_names_collects_references_only() {
        let found = names(
            "import os.path as osp\nfrom collections import Counter\n\ndef count_words(text, *args, limit=3, **kwargs):\n    total = Counter(text.split())\n    return osp.join(total, key=limit)\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["total", "Counter", "text", "osp", "total", "limit"]);
    }

    #[test]
    fn relative_import_paths_are_not_names() {
        let found = names(
            "from .utils import flat\nfrom ..pkg.sub import x as y\nfrom . import sibling\nflat(y)\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["flat", "y"]);
    }

    #[test]
    fn all_names_skip_dunder() {
        let found = names(
            "if __name__ == '__main__':\n    main_loop = __file__\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["main_loop"]);
    }

    #[test]
    fn with_target_is_a_name_but_except_alias_is_not() {
        let found = names(
            "try:\n    with open(path) as handle:\n        pass\nexcept OSError as err:\n    pass\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["open", "path", "handle", "OSError"]);
    }

    #[test]
    fn match_patterns_count_only_looked_up_names() {
        let found = names(
            "match cmd:\n    case Point(x=0, y=py):\n        pass\n    case Color.RED:\n        pass\n    case [first, *rest]:\n        pass\n    case Point() as p:\n        pass\n    case other:\n        pass\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["cmd", "Point", "Color", "Point"]);
    }

    #[test]
    fn declared_type_parameters_are_not_names() {
        let found = names(
            "def first[T](xs: list[T]) -> T:\n    return xs[0]\n\nclass Box[V]:\n    item: V\n",
            ExtractionMode::AllNames,
        );
        assert_eq!(found, vec!["list", "T", "T", "xs", "item", "V"]);
    }

    #[test]
    fn reserved_name_needs_both_markers() {
        assert!(is_reserved_name("__init__"));
        assert!(!is_reserved_name("__init"));
        assert!(!is_reserved_name("init__"));
        assert!(!is_reserved_name("_init_"));
    }
}
