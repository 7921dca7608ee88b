pub const FUNCTION_NAME_QUERY: &str = "(function_definition name: (identifier) @name)";

/// Python 2 statements the grammar still accepts but the language no longer
/// has.
pub const LEGACY_STATEMENT_QUERY: &str = r#"
[
  (print_statement)
  (exec_statement)
] @legacy
"#;
