use tree_sitter::Node;

const IMPORT_STATEMENTS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

const PARAMETER_LISTS: &[&str] = &["parameters", "lambda_parameters", "typed_parameter"];

const EXCEPT_CLAUSES: &[&str] = &["except_clause", "except_group_clause"];

/// Decides whether an `identifier` node reads or binds a variable-like name.
///
/// Identifiers that only label something else are not name references:
/// definition names, `obj.attr` members, keyword-argument names, parameters,
/// import paths and aliases, `global`/`nonlocal` declarations, the target
/// of `except ... as name`, declared type parameters, and the names a
/// `case` pattern captures or matches by keyword.
pub fn is_name_reference(node: Node) -> bool {
    if node.kind() != "identifier" {
        return false;
    }

    let Some(parent) = node.parent() else {
        return true;
    };

    match parent.kind() {
        "function_definition" | "class_definition" | "keyword_argument" | "default_parameter"
        | "typed_default_parameter" => !is_field(parent, "name", node),
        "attribute" => !is_field(parent, "attribute", node),
        "parameters" | "lambda_parameters" | "typed_parameter" => false,
        "list_splat_pattern" | "dictionary_splat_pattern" => !parent
            .parent()
            .is_some_and(|p| PARAMETER_LISTS.contains(&p.kind())),
        "aliased_import" => !in_import(parent),
        "dotted_name" if in_import(parent) => false,
        "dotted_name" => is_pattern_lookup(parent, node),
        "keyword_pattern" | "splat_pattern" => false,
        "as_pattern" => !follows_as(node),
        "type" | "splat_type" => !declares_type_parameter(parent),
        "global_statement" | "nonlocal_statement" => false,
        kind if EXCEPT_CLAUSES.contains(&kind) => !is_except_alias(parent, node),
        "as_pattern_target" => !parent
            .parent()
            .and_then(|as_pattern| as_pattern.parent())
            .is_some_and(|p| EXCEPT_CLAUSES.contains(&p.kind())),
        _ => true,
    }
}

fn is_field(parent: Node, field: &str, node: Node) -> bool {
    parent.child_by_field_name(field) == Some(node)
}

fn in_import(mut node: Node) -> bool {
    loop {
        if IMPORT_STATEMENTS.contains(&node.kind()) {
            return true;
        }
        match node.kind() {
            "dotted_name" | "aliased_import" | "relative_import" => {}
            _ => return false,
        }
        match node.parent() {
            Some(parent) => node = parent,
            None => return false,
        }
    }
}

fn is_except_alias(clause: Node, node: Node) -> bool {
    if is_field(clause, "alias", node) {
        return true;
    }
    node.prev_sibling()
        .is_some_and(|prev| prev.kind() == "as" || prev.kind() == ",")
}

fn follows_as(node: Node) -> bool {
    node.prev_sibling().is_some_and(|prev| prev.kind() == "as")
}

/// Outside imports a `dotted_name` only appears in `case` patterns. `A.B`
/// looks up `A`; a bare name is a capture unless it names the class of a
/// class pattern.
fn is_pattern_lookup(dotted: Node, node: Node) -> bool {
    if dotted.named_child(0) != Some(node) {
        return false;
    }
    dotted.named_child_count() > 1
        || dotted.parent().is_some_and(|p| p.kind() == "class_pattern")
}

/// True when `ty` is the declared name of a PEP 695 type parameter, as in
/// `def f[T]`, `class C[T: int]`, `def g[*Ts]` or `type Alias[T] = ...`.
/// Uses such as `list[T]` are not declarations.
fn declares_type_parameter(ty: Node) -> bool {
    let mut outer = ty;
    if outer.kind() == "splat_type" {
        match outer.parent() {
            Some(wrapper) => outer = wrapper,
            None => return false,
        }
    }
    if let Some(parent) = outer.parent() {
        if parent.kind() == "constrained_type" && parent.named_child(0) == Some(outer) {
            match parent.parent() {
                Some(wrapper) => outer = wrapper,
                None => return false,
            }
        }
    }

    let Some(list) = outer.parent().filter(|p| p.kind() == "type_parameter") else {
        return false;
    };
    let Some(owner) = list.parent() else {
        return false;
    };

    match owner.kind() {
        "function_definition" | "class_definition" => true,
        "generic_type" => owner
            .parent()
            .filter(|p| p.kind() == "type")
            .and_then(|alias| alias.parent().map(|stmt| (alias, stmt)))
            .is_some_and(|(alias, stmt)| {
                stmt.kind() == "type_alias_statement" && stmt.named_child(0) == Some(alias)
            }),
        _ => false,
    }
}
