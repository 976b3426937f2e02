use crate::field_matcher::match_field_declaration;
use crate::field_matcher::normalize_return_type;
use crate::field_matcher::parse_parameters;
use crate::line_scanner::BLOCK_STRING_DELIMITER;
use crate::line_scanner::BlankLinePolicy;
use crate::line_scanner::BraceDelta;
use crate::line_scanner::BraceDepth;
use crate::line_scanner::DescriptionBuffer;
use crate::line_scanner::LineClass;
use crate::type_header::is_root_block_header;
use crate::Operation;
use crate::OperationKind;

/// Collects the fields declared on the root type for `kind` (`type Query` or
/// `type Mutation`) in the order they appear.
///
/// Only the first matching root block is scanned; a later `type Query` block
/// (or any `extend type Query`) is ignored. Lines inside the block that are
/// not field declarations are skipped.
pub fn extract_operations(source: &str, kind: OperationKind) -> Vec<Operation> {
    let root_type_name = kind.root_type_name();
    let mut scanner = RootBlockScanner {
        descriptions: DescriptionBuffer::new(BlankLinePolicy::Reset),
        kind,
        operations: vec![],
    };
    let mut depth = BraceDepth::default();
    let mut in_root_block = false;

    for (line_idx, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if !in_root_block {
            if !is_root_block_header(trimmed, root_type_name) {
                continue;
            }
            log::trace!("Found `type {root_type_name}` block on line {line_idx}.");
            in_root_block = true;
            depth.apply(BraceDelta::of(trimmed));

            // Fields may share the header line: `type Query { foo: Bar }`
            if let Some(open_idx) = trimmed.find('{') {
                let body = &trimmed[open_idx + 1..];
                let body =
                    if depth.has_closed() {
                        body.rfind('}').map_or(body, |close_idx| &body[..close_idx])
                    } else {
                        body
                    };
                scanner.visit_segment(line_idx, body);
            }
        } else {
            depth.apply(BraceDelta::of(trimmed));
            if depth.has_closed() {
                // The closing line may still carry a field: `  foo: Bar }`
                let body = trimmed.rfind('}').map_or(trimmed, |close_idx| &trimmed[..close_idx]);
                scanner.visit_segment(line_idx, body);
            } else {
                scanner.visit_segment(line_idx, trimmed);
            }
        }

        if depth.has_closed() {
            break;
        }
    }

    log::debug!(
        "Extracted {} {kind} operations from `type {root_type_name}`.",
        scanner.operations.len(),
    );
    scanner.operations
}

struct RootBlockScanner<'src> {
    descriptions: DescriptionBuffer<'src>,
    kind: OperationKind,
    operations: Vec<Operation>,
}

impl<'src> RootBlockScanner<'src> {
    fn visit_segment(&mut self, line_idx: usize, segment: &'src str) {
        let segment = segment.trim();

        // A field declaration ends a block string that was never closed.
        if self.descriptions.is_in_block_string()
            && !segment.contains(BLOCK_STRING_DELIMITER)
            && match_field_declaration(segment).is_some() {
            log::trace!(
                "Unterminated block string ends at field on line {line_idx}.",
            );
            self.descriptions.end_block_string();
        }

        if self.descriptions.feed(segment) != LineClass::Code {
            return;
        }

        // A description only belongs to the code line directly below it, so
        // it is consumed here whether or not the line turns out to be a field.
        let description = self.descriptions.take();
        let Some(field) = match_field_declaration(segment) else {
            log::trace!(
                "Skipping non-field line {line_idx} in `type {}`: `{segment}`",
                self.kind.root_type_name(),
            );
            return;
        };

        self.operations.push(Operation {
            name: field.name.to_string(),
            kind: self.kind,
            description,
            parameters: field.arguments.map(parse_parameters),
            return_type: normalize_return_type(field.return_type),
            content: segment.to_string(),
            line: line_idx,
        });
    }
}
