//! Summarizes GraphQL schema documents (SDL) into a flat documentation model.
//!
//! A [`SchemaSummary`] holds the [`Operation`]s declared on the `Query` and
//! `Mutation` root types plus every other [`TypeDefinition`] in the document,
//! each with its description and the literal source text it was declared
//! with.
//!
//! Summarization is a line-oriented scan rather than a full parse: it never
//! fails, and malformed input simply yields fewer entries.
//!
//! ```rust
//! use libgraphql_sdldoc::OperationKind;
//! use libgraphql_sdldoc::SchemaSummary;
//!
//! let summary = SchemaSummary::from_source(r#"
//! type Query {
//!   """Fetches a widget by id"""
//!   widget(id: ID!): Widget
//! }
//!
//! enum Color { RED GREEN BLUE }
//! "#);
//!
//! let widget = summary.find_operation("widget").unwrap();
//! assert_eq!(widget.kind(), OperationKind::Query);
//! assert_eq!(widget.description(), Some("Fetches a widget by id"));
//! assert_eq!(summary.type_definitions().len(), 1);
//! ```

mod field_matcher;
mod line_scanner;
mod operation;
mod operation_extractor;
mod schema_file;
mod schema_summary;
mod summary_cache;
mod summary_options;
mod type_definition;
mod type_definition_extractor;
mod type_header;

pub use field_matcher::FieldDeclaration;
pub use field_matcher::match_field_declaration;
pub use field_matcher::normalize_return_type;
pub use field_matcher::parse_parameters;
pub use line_scanner::BlankLinePolicy;
pub use line_scanner::BraceDelta;
pub use line_scanner::DescriptionBuffer;
pub use line_scanner::LineClass;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::Parameter;
pub use operation_extractor::extract_operations;
pub use schema_file::ReadSchemaError;
pub use schema_file::decode_schema_bytes;
pub use schema_file::read_schema_file;
pub use schema_summary::SchemaSummary;
pub use schema_summary::summarize;
pub use schema_summary::summarize_with_options;
pub use summary_cache::SummaryCache;
pub use summary_options::ParseReservedHeaderPolicyError;
pub use summary_options::ReservedHeaderPolicy;
pub use summary_options::SummaryOptions;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeDefinitionKind;
pub use type_definition_extractor::extract_type_definitions;
pub use type_header::RESERVED_ROOT_TYPE_NAMES;
pub use type_header::TypeHeader;
pub use type_header::is_reserved_root_type_name;
pub use type_header::is_root_block_header;
pub use type_header::match_type_header;

#[cfg(test)]
mod tests;
