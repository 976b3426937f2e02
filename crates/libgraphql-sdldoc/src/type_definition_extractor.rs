use crate::line_scanner::BlankLinePolicy;
use crate::line_scanner::BraceDelta;
use crate::line_scanner::BraceDepth;
use crate::line_scanner::DescriptionBuffer;
use crate::line_scanner::LineClass;
use crate::type_header::match_type_header;
use crate::type_header::TypeHeader;
use crate::ReservedHeaderPolicy;
use crate::SummaryOptions;
use crate::TypeDefinition;

/// Collects every `type`, `interface`, `enum`, `scalar`, `union` and `input`
/// definition in the order they appear, skipping the reserved `Query`,
/// `Mutation` and `Subscription` root types.
///
/// A definition spans from its header line through the line on which its
/// braces balance again. `scalar` and `union` definitions end on their header
/// line unless a `{` keeps them open. A definition whose braces never balance
/// ends where the next definition starts (or at the end of the document).
///
/// While a definition's body is open (brace depth above zero), only lines
/// that start at column 0 can start a new definition. This keeps indented
/// body text such as `  type of the widget` inside a field description from
/// being mistaken for a header.
pub fn extract_type_definitions(
    source: &str,
    options: &SummaryOptions,
) -> Vec<TypeDefinition> {
    let mut scanner = TypeDefinitionScanner::new(options.reserved_header_policy);
    for (line_idx, line) in source.lines().enumerate() {
        scanner.visit_line(line_idx, line);
    }
    scanner.finish()
}

#[derive(Debug)]
struct OpenDefinition<'src> {
    header: TypeHeader<'src>,
    depth: BraceDepth,
    description: Option<String>,
    first_line_idx: usize,
    lines: Vec<&'src str>,
}

impl<'src> OpenDefinition<'src> {
    fn is_complete(&self, last_delta: BraceDelta) -> bool {
        if self.depth.is_nested() {
            return false;
        }
        last_delta.has_close() || !self.header.kind.has_body()
    }

    fn into_type_definition(self) -> TypeDefinition {
        TypeDefinition {
            name: self.header.name.to_string(),
            kind: self.header.kind,
            description: self.description,
            content: self.lines.join("\n"),
            line: self.first_line_idx,
        }
    }
}

#[derive(Debug)]
enum ScanState<'src> {
    Outside,
    Open(OpenDefinition<'src>),
    SkippingReservedBlock(BraceDepth),
}

struct TypeDefinitionScanner<'src> {
    descriptions: DescriptionBuffer<'src>,
    reserved_header_policy: ReservedHeaderPolicy,
    state: ScanState<'src>,
    type_definitions: Vec<TypeDefinition>,
}

impl<'src> TypeDefinitionScanner<'src> {
    fn new(reserved_header_policy: ReservedHeaderPolicy) -> Self {
        Self {
            descriptions: DescriptionBuffer::new(BlankLinePolicy::Keep),
            reserved_header_policy,
            state: ScanState::Outside,
            type_definitions: vec![],
        }
    }

    fn visit_line(&mut self, line_idx: usize, line: &'src str) {
        let trimmed = line.trim();

        // A reserved header not followed by a `{` line has no body.
        if let ScanState::SkippingReservedBlock(depth) = &self.state
            && !depth.has_opened()
            && !trimmed.starts_with('{') {
            self.state = ScanState::Outside;
        }

        if let Some(header) = self.match_header(line, trimmed) {
            if header.is_reserved() {
                self.visit_reserved_header(line_idx, header, trimmed);
            } else {
                self.open_definition(line_idx, header, line);
            }
            return;
        }

        match &mut self.state {
            ScanState::Outside => {
                if self.descriptions.feed(trimmed) == LineClass::Code {
                    log::trace!(
                        "Dropping description buffered above line {line_idx}: \
                        `{trimmed}`",
                    );
                    self.descriptions.clear();
                }
            },

            ScanState::Open(definition) => {
                let delta = BraceDelta::of(line);
                definition.lines.push(line);
                definition.depth.apply(delta);
                if definition.is_complete(delta) {
                    self.close_definition();
                }
            },

            ScanState::SkippingReservedBlock(depth) => {
                depth.apply(BraceDelta::of(trimmed));
                if depth.has_closed() {
                    self.state = ScanState::Outside;
                }
            },
        }
    }

    fn match_header(&self, line: &'src str, trimmed: &'src str) -> Option<TypeHeader<'src>> {
        match &self.state {
            ScanState::Outside if self.descriptions.is_in_block_string() => None,
            ScanState::Outside => match_type_header(trimmed),
            ScanState::Open(definition) if definition.depth.is_nested() =>
                match_type_header(line.trim_end()),
            ScanState::Open(_) => match_type_header(trimmed),
            ScanState::SkippingReservedBlock(depth) if depth.is_nested() =>
                match_type_header(line.trim_end()),
            // A reserved header with no `{` yet may turn out to have no body.
            ScanState::SkippingReservedBlock(_) => match_type_header(trimmed),
        }
    }

    fn visit_reserved_header(
        &mut self,
        line_idx: usize,
        header: TypeHeader<'src>,
        trimmed: &'src str,
    ) {
        log::trace!(
            "Skipping reserved root type `{}` on line {line_idx}.",
            header.name,
        );
        match self.reserved_header_policy {
            ReservedHeaderPolicy::SkipLine => (),
            ReservedHeaderPolicy::HardBoundary => {
                self.close_definition();
                self.descriptions.clear();
                let mut depth = BraceDepth::default();
                depth.apply(BraceDelta::of(trimmed));
                self.state =
                    if depth.has_closed() {
                        ScanState::Outside
                    } else {
                        ScanState::SkippingReservedBlock(depth)
                    };
            },
        }
    }

    fn open_definition(
        &mut self,
        line_idx: usize,
        header: TypeHeader<'src>,
        line: &'src str,
    ) {
        self.close_definition();

        let delta = BraceDelta::of(line);
        let mut depth = BraceDepth::default();
        depth.apply(delta);
        let definition = OpenDefinition {
            header,
            depth,
            description: self.descriptions.take(),
            first_line_idx: line_idx,
            lines: vec![line],
        };
        let is_complete = definition.is_complete(delta);
        self.state = ScanState::Open(definition);
        if is_complete {
            self.close_definition();
        }
    }

    /// Finalizes the open definition (if any) and returns to the outside
    /// state. Any other state is left untouched.
    fn close_definition(&mut self) {
        if !matches!(self.state, ScanState::Open(_)) {
            return;
        }
        if let ScanState::Open(definition) =
            std::mem::replace(&mut self.state, ScanState::Outside) {
            self.type_definitions.push(definition.into_type_definition());
        }
    }

    fn finish(mut self) -> Vec<TypeDefinition> {
        self.close_definition();
        log::debug!(
            "Extracted {} type definitions.",
            self.type_definitions.len(),
        );
        self.type_definitions
    }
}
