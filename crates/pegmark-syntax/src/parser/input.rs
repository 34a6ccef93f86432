/// An immutable view of the unconsumed part of the source text.
///
/// Patterns never mutate an `Input`; a successful match hands back a new one
/// further along, a failed match hands back the one it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    /// The whole text being parsed.
    source: &'a str,
    /// Byte offset of the first unconsumed character.
    offset: usize,
}

impl<'a> Input<'a> {
    /// Creates an input positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, offset: 0 }
    }

    /// The remaining, unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Byte offset into the original source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if nothing is left to consume.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Returns a new input `n` bytes further along.
    ///
    /// `n` must land on a char boundary inside the source.
    pub fn advance(&self, n: usize) -> Self {
        debug_assert!(self.source.is_char_boundary(self.offset + n));
        Self {
            source: self.source,
            offset: self.offset + n,
        }
    }

    /// Text consumed between `earlier` and `self`.
    pub fn consumed_since(&self, earlier: Input<'a>) -> &'a str {
        &self.source[earlier.offset..self.offset]
    }

    /// 1-based line and column (in chars) of the current position.
    pub fn line_col(&self) -> (usize, usize) {
        let before = &self.source[..self.offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_basics() {
        let input = Input::new("hello");
        assert_eq!(input.offset(), 0);
        assert!(!input.is_empty());
        assert_eq!(input.rest(), "hello");
        assert!(input.starts_with("he"));
    }

    #[test]
    fn advance_returns_new_view() {
        let input = Input::new("hello");
        let later = input.advance(2);
        assert_eq!(input.rest(), "hello");
        assert_eq!(later.rest(), "llo");
        assert_eq!(later.consumed_since(input), "he");
    }

    #[test]
    fn consumed_prefix_and_rest_rebuild_source() {
        let input = Input::new("some words\nmore");
        let later = input.advance(11);
        let rebuilt = format!("{}{}", later.consumed_since(input), later.rest());
        assert_eq!(rebuilt, input.rest());
    }

    #[test]
    fn empty_input() {
        let input = Input::new("");
        assert!(input.is_empty());
        assert_eq!(input.rest(), "");
        assert!(input.starts_with(""));
        assert_eq!(input.line_col(), (1, 1));
    }

    #[test]
    fn line_col_counts_chars() {
        let input = Input::new("ab\ncé d").advance("ab\ncé ".len());
        assert_eq!(input.line_col(), (2, 4));
    }
}
