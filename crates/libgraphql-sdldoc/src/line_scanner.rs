//! Line-level primitives shared by the operation and type definition scans.
//!
//! Both scans walk the document one line at a time, track how deeply nested
//! in `{ ... }` blocks they are, and buffer description text (`"""` strings
//! and `#` comments) until the declaration it documents shows up.

use smallvec::SmallVec;

pub(crate) const BLOCK_STRING_DELIMITER: &str = "\"\"\"";

/// The number of `{` and `}` characters on a single line.
///
/// Every occurrence is counted, including braces that appear inside string
/// literals or comments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BraceDelta {
    pub opened: usize,
    pub closed: usize,
}

impl BraceDelta {
    pub fn of(line: &str) -> Self {
        let bytes = line.as_bytes();
        Self {
            opened: memchr::memchr_iter(b'{', bytes).count(),
            closed: memchr::memchr_iter(b'}', bytes).count(),
        }
    }

    /// Net change in brace depth contributed by the line.
    pub fn net(&self) -> isize {
        self.opened as isize - self.closed as isize
    }

    pub fn has_close(&self) -> bool {
        self.closed > 0
    }
}

/// Running brace depth across a sequence of lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct BraceDepth {
    depth: isize,
    has_opened: bool,
}

impl BraceDepth {
    pub(crate) fn apply(&mut self, delta: BraceDelta) {
        self.depth += delta.net();
        if delta.opened > 0 {
            self.has_opened = true;
        }
    }

    /// True once at least one `{` was seen and every brace since has been
    /// matched (stray extra `}`s count as balanced too).
    pub(crate) fn has_closed(&self) -> bool {
        self.has_opened && self.depth <= 0
    }

    pub(crate) fn has_opened(&self) -> bool {
        self.has_opened
    }

    pub(crate) fn is_nested(&self) -> bool {
        self.depth > 0
    }
}

/// How a [`DescriptionBuffer`] reacts to a blank line that is not part of a
/// block string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlankLinePolicy {
    /// Blank lines drop whatever has been buffered so far. A description
    /// must sit directly above the declaration it documents.
    Reset,

    /// Blank lines are ignored.
    Keep,
}

/// Classification of a line fed to a [`DescriptionBuffer`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineClass {
    Blank,

    /// The line was consumed as description text (a `"""` string, a block
    /// string body line, or a `#` comment).
    Description,

    /// Anything else. The buffer does not consume code lines; callers decide
    /// whether the buffered text belongs to them or should be dropped.
    Code,
}

/// Accumulates description text across consecutive lines.
///
/// Fragments borrow from the source document and are only joined (with single
/// spaces) when [`take()`](Self::take) is called.
#[derive(Clone, Debug)]
pub struct DescriptionBuffer<'src> {
    blank_line_policy: BlankLinePolicy,
    fragments: SmallVec<[&'src str; 4]>,
    in_block_string: bool,
}

impl<'src> DescriptionBuffer<'src> {
    pub fn new(blank_line_policy: BlankLinePolicy) -> Self {
        Self {
            blank_line_policy,
            fragments: SmallVec::new(),
            in_block_string: false,
        }
    }

    /// Feeds one line to the buffer and reports how it was classified.
    ///
    /// Leading and trailing whitespace is ignored. While a multi-line `"""`
    /// block string is open every line is description text until a line
    /// ending in `"""` closes it.
    pub fn feed(&mut self, line: &'src str) -> LineClass {
        let trimmed = line.trim();

        if self.in_block_string {
            match trimmed.strip_suffix(BLOCK_STRING_DELIMITER) {
                Some(text) => {
                    self.push(text);
                    self.in_block_string = false;
                },
                None => self.push(trimmed),
            }
            return LineClass::Description;
        }

        if trimmed.is_empty() {
            if self.blank_line_policy == BlankLinePolicy::Reset {
                self.clear();
            }
            return LineClass::Blank;
        }

        if let Some(rest) = trimmed.strip_prefix(BLOCK_STRING_DELIMITER) {
            let delimiter_len = BLOCK_STRING_DELIMITER.len();
            if trimmed.len() > delimiter_len && trimmed.ends_with(BLOCK_STRING_DELIMITER) {
                // `""""` and `"""""` close immediately with no text.
                self.push(
                    trimmed.get(delimiter_len..trimmed.len() - delimiter_len)
                        .unwrap_or_default(),
                );
            } else {
                self.in_block_string = true;
                self.push(rest);
            }
            return LineClass::Description;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            self.push(
                comment.strip_suffix(BLOCK_STRING_DELIMITER).unwrap_or(comment),
            );
            return LineClass::Description;
        }

        LineClass::Code
    }

    /// Returns the buffered description (if any) and resets the buffer.
    pub fn take(&mut self) -> Option<String> {
        let description =
            if self.fragments.is_empty() {
                None
            } else {
                Some(self.fragments.join(" "))
            };
        self.clear();
        description
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
        self.in_block_string = false;
    }

    /// Closes an unterminated block string, keeping the text buffered so far.
    pub fn end_block_string(&mut self) {
        self.in_block_string = false;
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn is_in_block_string(&self) -> bool {
        self.in_block_string
    }

    fn push(&mut self, text: &'src str) {
        let text = text.trim();
        if !text.is_empty() {
            self.fragments.push(text);
        }
    }
}

/// Byte length of the ASCII identifier (`[A-Za-z_][A-Za-z0-9_]*`) at the
/// start of `text`, or `0` if `text` doesn't start with one.
pub(crate) fn identifier_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => (),
        _ => return 0,
    }
    bytes.iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

pub(crate) fn is_identifier(text: &str) -> bool {
    !text.is_empty() && identifier_len(text) == text.len()
}
