/// The SDL keyword a [`TypeDefinition`] was declared with.
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
pub enum TypeDefinitionKind {
    Enum,
    Input,
    Interface,
    Scalar,
    Type,
    Union,
}
impl TypeDefinitionKind {
    pub const ALL: [TypeDefinitionKind; 6] = [
        Self::Type,
        Self::Interface,
        Self::Enum,
        Self::Scalar,
        Self::Union,
        Self::Input,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Scalar => "scalar",
            Self::Type => "type",
            Self::Union => "union",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Whether definitions of this kind carry a `{ ... }` body.
    ///
    /// `scalar` and `union` definitions end on their declaration line unless
    /// a brace keeps them open.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Scalar | Self::Union)
    }
}
impl std::fmt::Display for TypeDefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A non-root type declared in a schema document.
#[derive(
    Clone,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub(crate) name: String,
    pub(crate) kind: TypeDefinitionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) content: String,
    pub(crate) line: usize,
}
impl TypeDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn kind(&self) -> TypeDefinitionKind {
        self.kind
    }

    /// The description (`"""` string or `#` comments) written above the
    /// definition, joined with single spaces.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The definition's source lines, from its declaration line through the
    /// line holding its closing brace, exactly as written.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// 0-based index of the declaration line.
    pub fn line(&self) -> usize {
        self.line
    }
}
