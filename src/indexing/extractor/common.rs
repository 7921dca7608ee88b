use crate::parsers::SyntaxTree;
use log::warn;
use tree_sitter::{Node, Query, QueryCursor, StreamingIterator};

// Helpers shared by the name extraction modes

pub fn get_node_text(node: Node, source: &str) -> String {
    let start_byte = node.start_byte();
    let end_byte = node.end_byte();

    if start_byte >= source.len() || end_byte > source.len() {
        return String::new();
    }

    source[start_byte..end_byte].to_string()
}

/// Runs a compiled query over the whole tree and returns the nodes bound to
/// `capture_name`, in document order.
pub fn execute_query<'a>(
    query: &Query,
    tree: &'a SyntaxTree,
    capture_name: &str,
) -> Vec<Node<'a>> {
    let mut result = Vec::new();

    let Some(capture_idx) = query.capture_index_for_name(capture_name) else {
        warn!("Query has no capture named {}", capture_name);
        return result;
    };

    let mut query_cursor = QueryCursor::new();
    let mut matches = query_cursor.matches(query, tree.root_node(), tree.source().as_bytes());

    while let Some(match_result) = matches.next() {
        for capture in match_result.captures {
            if capture.index == capture_idx {
                result.push(capture.node);
            }
        }
    }

    result
}

/// Visits every node of the tree in pre-order (depth first, parents before
/// children, siblings left to right).
pub fn walk_preorder<'a>(tree: &'a SyntaxTree, mut visit: impl FnMut(Node<'a>)) {
    let mut cursor = tree.root_node().walk();

    loop {
        visit(cursor.node());

        if cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}
