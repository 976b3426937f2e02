use crate::line_scanner::identifier_len;
use crate::TypeDefinitionKind;

/// Root type names that are summarized as operations (or, for
/// `Subscription`, not at all) and never as type definitions.
pub const RESERVED_ROOT_TYPE_NAMES: [&str; 3] = [
    "Query",
    "Mutation",
    "Subscription",
];

pub fn is_reserved_root_type_name(name: &str) -> bool {
    RESERVED_ROOT_TYPE_NAMES.contains(&name)
}

/// The keyword and name that open a type definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeHeader<'src> {
    pub kind: TypeDefinitionKind,
    pub name: &'src str,
}
impl TypeHeader<'_> {
    pub fn is_reserved(&self) -> bool {
        is_reserved_root_type_name(self.name)
    }
}

/// Matches `<keyword> <identifier>` at the very start of `line`, where
/// `<keyword>` is one of `type`, `interface`, `enum`, `scalar`, `union` or
/// `input`.
///
/// Whatever follows the identifier (`implements ...`, `= A | B`, `{`, ...) is
/// not inspected. `extend type Foo` does not match.
pub fn match_type_header(line: &str) -> Option<TypeHeader<'_>> {
    TypeDefinitionKind::ALL.into_iter().find_map(|kind| {
        let rest = line.strip_prefix(kind.keyword())?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = rest.trim_start();
        match identifier_len(rest) {
            0 => None,
            len => Some(TypeHeader { kind, name: &rest[..len] }),
        }
    })
}

/// Whether `line` opens the `type <root_type_name>` block: it is exactly
/// `type <root_type_name>` or continues with whitespace or `{`.
pub fn is_root_block_header(line: &str, root_type_name: &str) -> bool {
    let Some(rest) = line.strip_prefix("type") else {
        return false;
    };
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let Some(after_name) = rest.trim_start().strip_prefix(root_type_name) else {
        return false;
    };
    after_name.is_empty()
        || after_name.starts_with(char::is_whitespace)
        || after_name.starts_with('{')
}
