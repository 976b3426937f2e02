//! Anchored matching of field declarations such as
//! `widget(id: ID!, first: Int = 10): [Widget!]!`.
//!
//! A field declaration is:
//!
//! ```text
//! <identifier> [ "(" <arguments> ")" ] ":" <return-type> [ "{" ... ]
//! ```
//!
//! Only one declaration is recognized per line. Anything that doesn't fit the
//! shape above is rejected without error.

use crate::line_scanner::identifier_len;
use crate::line_scanner::is_identifier;
use crate::Parameter;

/// The raw pieces of a matched field declaration. All slices borrow from the
/// matched text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDeclaration<'src> {
    pub name: &'src str,

    /// Text between the outermost parentheses of the argument list, or
    /// `None` if the field has no argument list.
    pub arguments: Option<&'src str>,

    /// Text after the `:` up to the first `{` (or end of text), trimmed.
    pub return_type: &'src str,
}

pub fn match_field_declaration(text: &str) -> Option<FieldDeclaration<'_>> {
    let text = text.trim();
    let name_len = identifier_len(text);
    if name_len == 0 {
        return None;
    }
    let (name, rest) = text.split_at(name_len);
    let rest = rest.trim_start();

    let (arguments, rest) =
        if let Some(after_paren) = rest.strip_prefix('(') {
            let close_idx = find_closing_paren(after_paren)?;
            (
                Some(&after_paren[..close_idx]),
                after_paren[close_idx + 1..].trim_start(),
            )
        } else {
            (None, rest)
        };

    let rest = rest.strip_prefix(':')?;
    let return_type =
        match rest.find('{') {
            Some(brace_idx) => &rest[..brace_idx],
            None => rest,
        }.trim();
    if return_type.is_empty() {
        return None;
    }

    Some(FieldDeclaration {
        name,
        arguments,
        return_type,
    })
}

/// Splits an argument list into [`Parameter`]s.
///
/// Arguments are separated by commas that are not nested inside brackets,
/// braces, parentheses or string literals. Each argument has the shape
/// `<name> : <type> [= <default>]`; arguments that don't are skipped.
pub fn parse_parameters(arguments: &str) -> Vec<Parameter> {
    split_top_level(arguments, ',')
        .into_iter()
        .filter(|argument| !argument.trim().is_empty())
        .filter_map(parse_parameter)
        .collect()
}

/// Removes non-null markers and stray commas from a raw return type.
pub fn normalize_return_type(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '!' | ','))
        .collect::<String>()
        .trim()
        .to_string()
}

fn parse_parameter(argument: &str) -> Option<Parameter> {
    let (name, type_and_default) = argument.split_once(':')?;
    let name = name.trim();
    if !is_identifier(name) {
        log::trace!("Skipping argument with invalid name: `{argument}`");
        return None;
    }

    let (type_expr, default_value) =
        match split_top_level(type_and_default, '=').as_slice() {
            [type_expr] => (*type_expr, None),
            [type_expr, default_value, ..] => (*type_expr, Some(*default_value)),
            [] => return None,
        };

    let required = type_expr.contains('!');
    let type_name = type_expr.replace('!', "").trim().to_string();
    if type_name.is_empty() {
        return None;
    }

    Some(Parameter {
        name: name.to_string(),
        type_name,
        required,
        default_value: default_value
            .map(str::trim)
            .filter(|default_value| !default_value.is_empty())
            .map(str::to_string),
    })
}

/// Byte index of the `)` that closes an already-consumed `(`.
fn find_closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => (),
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            },
            _ => (),
        }
    }
    None
}

/// Splits `text` on every `separator` that isn't nested inside `()`, `[]`,
/// `{}` or a `"` string literal.
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = vec![];
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    let mut piece_start = 0;
    for (idx, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => (),
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                pieces.push(&text[piece_start..idx]);
                piece_start = idx + ch.len_utf8();
            },
            _ => (),
        }
    }
    pieces.push(&text[piece_start..]);
    pieces
}
