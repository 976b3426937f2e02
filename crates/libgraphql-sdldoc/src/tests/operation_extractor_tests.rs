//! Tests for `extract_operations()`.

use crate::extract_operations;
use crate::tests::utils::WIDGET_SCHEMA;
use crate::tests::utils::operation;
use crate::tests::utils::operation_names;
use crate::tests::utils::parameter;
use crate::OperationKind;

// =============================================================================
// Root block detection
// =============================================================================

#[test]
fn single_field_query_block() {
    let ops = extract_operations(
        "type Query {\n  foo: Bar\n}\n",
        OperationKind::Query,
    );
    assert_eq!(ops, vec![
        operation("foo", OperationKind::Query, "foo: Bar", 1)
            .return_type("Bar")
            .build(),
    ]);
    assert_eq!(ops[0].parameters(), None);
    assert_eq!(ops[0].description(), None);
}

/// Fields written on the same line as the root block's braces are still
/// recognized, and `content` holds just the field text.
#[test]
fn field_on_header_line() {
    let ops = extract_operations("type Query { foo: Bar }", OperationKind::Query);
    assert_eq!(ops, vec![
        operation("foo", OperationKind::Query, "foo: Bar", 0)
            .return_type("Bar")
            .build(),
    ]);
}

#[test]
fn field_on_closing_line() {
    let ops = extract_operations(
        "type Query {\n  foo: Bar\n  baz: Qux }\nbogus: Field\n",
        OperationKind::Query,
    );
    assert_eq!(operation_names(&ops), vec!["foo", "baz"]);
    assert_eq!(ops[1].content(), "baz: Qux");
}

#[test]
fn header_without_brace_on_same_line() {
    let ops = extract_operations(
        "type Query\n{\n  foo: Bar\n}\n",
        OperationKind::Query,
    );
    assert_eq!(operation_names(&ops), vec!["foo"]);
    assert_eq!(ops[0].line(), 2);
}

#[test]
fn header_directly_followed_by_brace() {
    let ops = extract_operations("type Query{\n  foo: Bar\n}", OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["foo"]);
}

#[test]
fn similarly_named_root_types_are_not_matched() {
    let source = concat!(
        "type QueryRoot {\n  wrong: Bar\n}\n",
        "extend type Query {\n  alsoWrong: Bar\n}\n",
        "type Query {\n  right: Bar\n}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["right"]);
}

/// Scanning stops at the end of the first root block; a second
/// `type Query` block is not summarized.
#[test]
fn only_first_root_block_is_scanned() {
    let source = "type Query {\n  first: A\n}\ntype Query {\n  second: B\n}\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["first"]);
}

#[test]
fn lines_after_root_block_are_ignored() {
    let source = "type Query {\n  foo: Bar\n}\n  stray: Field\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["foo"]);
}

#[test]
fn mutation_block_is_independent_of_query_block() {
    let queries = extract_operations(WIDGET_SCHEMA, OperationKind::Query);
    let mutations = extract_operations(WIDGET_SCHEMA, OperationKind::Mutation);

    assert_eq!(operation_names(&queries), vec!["widget", "widgets", "search"]);
    assert_eq!(operation_names(&mutations), vec!["createWidget", "deleteWidget"]);
    assert!(mutations.iter().all(|op| op.kind() == OperationKind::Mutation));
}

#[test]
fn missing_root_block_yields_nothing() {
    let ops = extract_operations("type Widget {\n  id: ID\n}\n", OperationKind::Query);
    assert!(ops.is_empty());
}

/// Nested braces on a field line (e.g. a default object value) keep the
/// block open until every brace is matched.
#[test]
fn nested_braces_do_not_end_block_early() {
    let source = concat!(
        "type Query {\n",
        "  search(filter: Filter = { limit: 1 }): [Widget]\n",
        "  other: Bar\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["search", "other"]);
    assert_eq!(
        ops[0].parameters().unwrap()[0].default_value(),
        Some("{ limit: 1 }"),
    );
}

// =============================================================================
// Field declarations
// =============================================================================

#[test]
fn widget_example() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"Fetches a widget by id\"\"\"\n",
        "  widget(id: ID!): Widget\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops, vec![
        operation("widget", OperationKind::Query, "widget(id: ID!): Widget", 2)
            .description("Fetches a widget by id")
            .parameters(vec![parameter("id", "ID", true)])
            .return_type("Widget")
            .build(),
    ]);
}

#[test]
fn required_and_optional_parameters() {
    let ops = extract_operations(
        "type Query {\n  node(id: ID!, scope: String): Node\n}",
        OperationKind::Query,
    );
    assert_eq!(
        ops[0].parameters(),
        Some(&[
            parameter("id", "ID", true),
            parameter("scope", "String", false),
        ][..]),
    );
}

#[test]
fn return_type_decorations_are_removed() {
    let ops = extract_operations(
        "type Query {\n  a: A!\n  b: [B!]!\n  c: [C]\n}",
        OperationKind::Query,
    );
    let return_types: Vec<_> = ops.iter().map(|op| op.return_type()).collect();
    assert_eq!(return_types, vec!["A", "[B]", "[C]"]);
}

/// A selection-like `{ ... }` suffix on a field line is not part of the
/// return type.
#[test]
fn return_type_stops_at_brace() {
    let ops = extract_operations(
        "type Query {\n  a: A { b }\n}",
        OperationKind::Query,
    );
    assert_eq!(ops[0].return_type(), "A");
    assert_eq!(ops[0].content(), "a: A { b }");
}

#[test]
fn empty_argument_list_is_kept_as_empty_parameters() {
    let ops = extract_operations("type Query {\n  ping(): Boolean\n}", OperationKind::Query);
    assert_eq!(ops[0].parameters(), Some(&[][..]));
}

#[test]
fn content_is_trimmed_source_line() {
    let ops = extract_operations(
        "type Query {\n\t   widget(id: ID!): Widget   \n}",
        OperationKind::Query,
    );
    assert_eq!(ops[0].content(), "widget(id: ID!): Widget");
}

#[test]
fn non_field_lines_are_skipped() {
    let source = concat!(
        "type Query {\n",
        "  this is not a field\n",
        "  (id: ID): Nope\n",
        "  missingType:\n",
        "  ok: Fine\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["ok"]);
}

#[test]
fn crlf_line_endings() {
    let source = "type Query {\r\n  \"\"\"Doc\"\"\"\r\n  foo: Bar\r\n}\r\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), Some("Doc"));
    assert_eq!(ops[0].content(), "foo: Bar");
}

// =============================================================================
// Descriptions
// =============================================================================

#[test]
fn comment_descriptions_are_joined() {
    let source = concat!(
        "type Query {\n",
        "  # Lists widgets,\n",
        "  # newest first.\n",
        "  widgets: [Widget]\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), Some("Lists widgets, newest first."));
}

#[test]
fn multi_line_block_string_description() {
    let ops = extract_operations(WIDGET_SCHEMA, OperationKind::Query);
    let search = ops.iter().find(|op| op.name() == "search").unwrap();
    assert_eq!(search.description(), Some("Searches widgets by free-form text."));
}

/// Blank lines inside an open block string don't reset the description.
#[test]
fn blank_line_inside_block_string_is_kept() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"\n",
        "  First paragraph.\n",
        "\n",
        "  Second paragraph.\n",
        "  \"\"\"\n",
        "  foo: Bar\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), Some("First paragraph. Second paragraph."));
}

#[test]
fn blank_line_detaches_description() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"Orphaned\"\"\"\n",
        "\n",
        "  foo: Bar\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), None);
}

/// A description is consumed by the first code line below it, even when that
/// line isn't a field.
#[test]
fn description_above_non_field_line_is_discarded() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"About something else\"\"\"\n",
        "  not a field\n",
        "  foo: Bar\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["foo"]);
    assert_eq!(ops[0].description(), None);
}

#[test]
fn description_does_not_carry_to_following_field() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"Only foo\"\"\"\n",
        "  foo: Bar\n",
        "  baz: Qux\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), Some("Only foo"));
    assert_eq!(ops[1].description(), None);
}

#[test]
fn empty_description_is_absent() {
    let source = "type Query {\n  \"\"\"   \"\"\"\n  #\n  foo: Bar\n}\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), None);
}

#[test]
fn descriptions_above_root_block_are_not_attached() {
    let source = "\"\"\"The root\"\"\"\ntype Query {\n  foo: Bar\n}\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(ops[0].description(), None);
}

#[test]
fn unterminated_block_string_ends_at_field() {
    let source = concat!(
        "type Query {\n",
        "  \"\"\"Fetches a widget\n",
        "  widget(id: ID!): Widget\n",
        "  gadget: Gadget\n",
        "}\n",
    );
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["widget", "gadget"]);
    assert_eq!(ops[0].description(), Some("Fetches a widget"));
    assert_eq!(ops[1].description(), None);
}

#[test]
fn four_quote_line_does_not_swallow_fields() {
    let source = "type Query {\n  \"\"\"\"\n  a: A\n  b: B\n}\n";
    let ops = extract_operations(source, OperationKind::Query);
    assert_eq!(operation_names(&ops), vec!["a", "b"]);
    assert_eq!(ops[0].description(), None);
}
