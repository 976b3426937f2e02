use crate::extract_operations;
use crate::extract_type_definitions;
use crate::read_schema_file;
use crate::Operation;
use crate::OperationKind;
use crate::ReadSchemaError;
use crate::SummaryOptions;
use crate::TypeDefinition;
use crate::TypeDefinitionKind;
use indexmap::IndexMap;
use std::path::Path;

/// The documentation model of a schema document: its root operations and its
/// remaining type definitions.
///
/// A summary is a pure function of the source text (and
/// [`SummaryOptions`]): summarizing the same text twice yields equal
/// summaries.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSummary {
    pub(crate) operations: Vec<Operation>,
    pub(crate) type_definitions: Vec<TypeDefinition>,
}

impl SchemaSummary {
    /// Summarizes `source` with default [`SummaryOptions`].
    pub fn from_source(source: &str) -> Self {
        Self::from_source_with_options(source, &SummaryOptions::default())
    }

    pub fn from_source_with_options(source: &str, options: &SummaryOptions) -> Self {
        let mut operations = vec![];
        for kind in OperationKind::ALL {
            operations.extend(extract_operations(source, kind));
        }

        Self {
            operations,
            type_definitions: extract_type_definitions(source, options),
        }
    }

    /// Summarizes `source` if there is one. A missing document has an empty
    /// summary.
    pub fn from_maybe_source(source: Option<&str>) -> Self {
        source.map(Self::from_source).unwrap_or_default()
    }

    /// Reads and summarizes the schema document at `file_path`.
    pub fn from_file(
        file_path: impl AsRef<Path>,
        options: &SummaryOptions,
    ) -> Result<Self, ReadSchemaError> {
        let source = read_schema_file(file_path)?;
        Ok(Self::from_source_with_options(source.as_str(), options))
    }

    /// Every operation: all `Query` fields followed by all `Mutation` fields,
    /// each group in source order.
    pub fn operations(&self) -> &[Operation] {
        self.operations.as_slice()
    }

    pub fn type_definitions(&self) -> &[TypeDefinition] {
        self.type_definitions.as_slice()
    }

    pub fn operations_of_kind(
        &self,
        kind: OperationKind,
    ) -> impl Iterator<Item = &Operation> {
        self.operations.iter().filter(move |op| op.kind() == kind)
    }

    pub fn queries(&self) -> impl Iterator<Item = &Operation> {
        self.operations_of_kind(OperationKind::Query)
    }

    pub fn mutations(&self) -> impl Iterator<Item = &Operation> {
        self.operations_of_kind(OperationKind::Mutation)
    }

    pub fn type_definitions_of_kind(
        &self,
        kind: TypeDefinitionKind,
    ) -> impl Iterator<Item = &TypeDefinition> {
        self.type_definitions.iter().filter(move |def| def.kind() == kind)
    }

    /// The first operation named `name`, looking at queries before mutations.
    pub fn find_operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }

    /// The first type definition named `name`.
    pub fn find_type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.type_definitions.iter().find(|def| def.name() == name)
    }

    /// Type definitions keyed by name, in source order.
    ///
    /// If a name is defined more than once, the map keeps the position of
    /// the first definition and the value of the last one.
    pub fn type_definitions_by_name(&self) -> IndexMap<&str, &TypeDefinition> {
        self.type_definitions.iter()
            .map(|def| (def.name(), def))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.type_definitions.is_empty()
    }
}

/// Summarizes a schema document with default [`SummaryOptions`].
pub fn summarize(source: &str) -> SchemaSummary {
    SchemaSummary::from_source(source)
}

pub fn summarize_with_options(source: &str, options: &SummaryOptions) -> SchemaSummary {
    SchemaSummary::from_source_with_options(source, options)
}
