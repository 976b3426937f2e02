//! Various test utils.

use crate::Operation;
use crate::OperationKind;
use crate::Parameter;
use crate::TypeDefinition;
use crate::TypeDefinitionKind;

/// A schema exercising most of what the summarizer understands.
pub const WIDGET_SCHEMA: &str = r#"# The widget service schema.
schema {
  query: Query
  mutation: Mutation
}

type Query {
  """Fetches a widget by id"""
  widget(id: ID!): Widget

  # Lists widgets, newest first.
  widgets(first: Int = 10, after: String): [Widget!]!

  """
  Searches widgets by
  free-form text.
  """
  search(text: String!, colors: [Color!]): [Widget]
}

type Mutation {
  createWidget(input: CreateWidgetInput!): Widget!
  deleteWidget(id: ID!): Boolean
}

type Subscription {
  widgetChanged(id: ID!): Widget
}

"""A thing that can be colored."""
interface Colorable {
  color: Color
}

"""
A widget.
"""
type Widget implements Colorable {
  id: ID!
  name: String
  color: Color
}

# Primary colors only.
enum Color { RED GREEN BLUE }

scalar DateTime

union SearchResult = Widget | Gadget

input CreateWidgetInput {
  name: String!
  color: Color = RED
}
"#;

pub fn parameter(name: &str, type_name: &str, required: bool) -> Parameter {
    Parameter::new(name, type_name, required)
}

pub fn operation(
    name: &str,
    kind: OperationKind,
    content: &str,
    line: usize,
) -> OperationExpectation {
    OperationExpectation {
        name: name.to_string(),
        kind,
        description: None,
        parameters: None,
        return_type: None,
        content: content.to_string(),
        line,
    }
}

/// Builds the expected [`Operation`] for an assertion, spelling out only the
/// fields a test cares about.
pub struct OperationExpectation {
    name: String,
    kind: OperationKind,
    description: Option<String>,
    parameters: Option<Vec<Parameter>>,
    return_type: Option<String>,
    content: String,
    line: usize,
}

impl OperationExpectation {
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn return_type(mut self, return_type: &str) -> Self {
        self.return_type = Some(return_type.to_string());
        self
    }

    pub fn build(self) -> Operation {
        Operation {
            name: self.name,
            kind: self.kind,
            description: self.description,
            parameters: self.parameters,
            return_type: self.return_type.unwrap_or_default(),
            content: self.content,
            line: self.line,
        }
    }
}

pub fn type_definition(
    name: &str,
    kind: TypeDefinitionKind,
    description: Option<&str>,
    content: &str,
    line: usize,
) -> TypeDefinition {
    TypeDefinition {
        name: name.to_string(),
        kind,
        description: description.map(str::to_string),
        content: content.to_string(),
        line,
    }
}

pub fn operation_names(operations: &[Operation]) -> Vec<&str> {
    operations.iter().map(|op| op.name()).collect()
}

pub fn type_definition_names(type_definitions: &[TypeDefinition]) -> Vec<&str> {
    type_definitions.iter().map(|def| def.name()).collect()
}
