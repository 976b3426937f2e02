/// The root operation type an [`Operation`] was declared on.
///
/// Fields of the `Subscription` root type are never summarized, so there is
/// no variant for them.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    /// Every kind, in the order operations are listed in a
    /// [`SchemaSummary`](crate::SchemaSummary).
    pub const ALL: [OperationKind; 2] = [Self::Query, Self::Mutation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }

    /// Name of the SDL root type whose fields are operations of this kind.
    pub fn root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single argument accepted by an [`Operation`].
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub(crate) name: String,
    #[serde(rename = "type")]
    pub(crate) type_name: String,
    pub(crate) required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) default_value: Option<String>,
}
impl Parameter {
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        required: bool,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required,
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type with every non-null marker (`!`) removed, e.g. `ID`
    /// for `id: ID!` or `[String]` for `tags: [String!]!`.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    /// Whether the declared type carried a non-null marker anywhere.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The literal default value text (`10` for `first: Int = 10`), if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// A field declared on the `Query` or `Mutation` root type.
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub(crate) name: String,
    pub(crate) kind: OperationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<Vec<Parameter>>,
    pub(crate) return_type: String,
    pub(crate) content: String,
    pub(crate) line: usize,
}
impl Operation {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The description written directly above the field, either as a `"""`
    /// string or as `#` comment lines, joined with single spaces.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The field's arguments in declaration order.
    ///
    /// This is `None` (rather than an empty slice) when the field was declared
    /// without an argument list at all.
    pub fn parameters(&self) -> Option<&[Parameter]> {
        self.parameters.as_deref()
    }

    /// The declared return type with non-null markers removed (list brackets
    /// are kept, so `[Widget!]!` becomes `[Widget]`).
    pub fn return_type(&self) -> &str {
        self.return_type.as_str()
    }

    /// The trimmed source text the field was declared with.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// 0-based index of the source line the field was declared on.
    pub fn line(&self) -> usize {
        self.line
    }
}
