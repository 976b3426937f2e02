//! Various test utils.

use crate::schema_input::LoadedSchema;
use libgraphql_sdldoc::SchemaSummary;
use std::path::PathBuf;

pub(super) const SMALL_SCHEMA: &str = concat!(
    "type Query {\n",
    "  \"\"\"Fetches a widget\"\"\"\n",
    "  widget(id: ID!, first: Int = 10): Widget\n",
    "}\n",
    "type Mutation {\n",
    "  ping: Boolean\n",
    "}\n",
    "# Colors.\n",
    "enum Color { RED }\n",
);

pub(super) fn loaded_schema(file_path: &str, source: &str) -> LoadedSchema {
    LoadedSchema {
        file_path: PathBuf::from(file_path),
        summary: SchemaSummary::from_source(source),
    }
}
