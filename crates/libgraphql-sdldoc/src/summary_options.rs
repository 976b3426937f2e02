/// Options that tune how a schema document is summarized.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryOptions {
    pub(crate) reserved_header_policy: ReservedHeaderPolicy,
}
impl SummaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reserved_header_policy(mut self, policy: ReservedHeaderPolicy) -> Self {
        self.reserved_header_policy = policy;
        self
    }

    pub fn reserved_header_policy(&self) -> ReservedHeaderPolicy {
        self.reserved_header_policy
    }
}

/// How the type definition scan treats `type Query`, `type Mutation` and
/// `type Subscription` headers.
///
/// Under either policy reserved root types never show up as type
/// definitions. The policies differ when a reserved header appears while
/// another definition is still open (e.g. because its closing brace is
/// missing).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReservedHeaderPolicy {
    /// The reserved header ends any open definition, and the reserved block
    /// is skipped up to its matching closing brace.
    #[default]
    HardBoundary,

    /// Only the reserved header line itself is skipped. An open definition
    /// keeps collecting the lines that follow it (including the reserved
    /// block's braces).
    SkipLine,
}
impl ReservedHeaderPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HardBoundary => "hard-boundary",
            Self::SkipLine => "skip-line",
        }
    }
}
impl std::fmt::Display for ReservedHeaderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl std::str::FromStr for ReservedHeaderPolicy {
    type Err = ParseReservedHeaderPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hard-boundary" => Ok(Self::HardBoundary),
            "skip-line" => Ok(Self::SkipLine),
            other => Err(ParseReservedHeaderPolicyError(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error(
    "Unknown reserved header policy: `{0}` (expected `hard-boundary` or \
    `skip-line`)"
)]
pub struct ParseReservedHeaderPolicyError(pub String);
