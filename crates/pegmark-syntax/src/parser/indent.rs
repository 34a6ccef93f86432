//! Dedenting for [`Pattern::Indented`](super::pattern::Pattern::Indented).
//!
//! An indented block is cut out of the input, its prefix stripped line by
//! line into a fresh string, and matched on its own. Afterwards the number
//! of dedented bytes the inner pattern consumed has to be translated back
//! into bytes of the original input; [`Dedented::original_len`] does that.

/// One line of the dedented block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineMap {
    /// Offset of the line start in the original text.
    original: usize,
    /// Offset of the line start in the dedented text.
    dedented: usize,
    /// Bytes stripped from the front of the line.
    prefix: usize,
}

/// An indented block with its prefixes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dedented {
    pub text: String,
    /// The unit chosen by the first line.
    pub unit: &'static str,
    lines: Vec<LineMap>,
}

impl Dedented {
    /// Cuts the indented block at the start of `rest`.
    ///
    /// Returns `None` if the first line does not start with any of `units`.
    pub fn new(rest: &str, units: &[&'static str]) -> Option<Self> {
        let first = rest.split_inclusive('\n').next()?;
        if is_blank(first) {
            return None;
        }
        let unit = units.iter().copied().find(|u| first.starts_with(u))?;

        let mut text = String::new();
        let mut lines = vec![];
        let mut pending = vec![];
        let mut original = 0;

        for line in rest.split_inclusive('\n') {
            if is_blank(line) {
                pending.push((original, line));
            } else if let Some(content) = line.strip_prefix(unit) {
                for (start, blank) in pending.drain(..) {
                    let prefix = blank.trim_end_matches('\n').len();
                    lines.push(LineMap {
                        original: start,
                        dedented: text.len(),
                        prefix,
                    });
                    text.push_str(&blank[prefix..]);
                }
                lines.push(LineMap {
                    original,
                    dedented: text.len(),
                    prefix: unit.len(),
                });
                text.push_str(content);
            } else {
                break;
            }
            original += line.len();
        }

        Some(Self { text, unit, lines })
    }

    /// Number of original bytes covered by the first `consumed` dedented bytes.
    ///
    /// A match that ends exactly at a line start does not take that line's
    /// prefix with it.
    pub fn original_len(&self, consumed: usize) -> usize {
        if consumed == 0 {
            return 0;
        }
        let Some(line) = self.lines.iter().rev().find(|l| l.dedented <= consumed) else {
            return 0;
        };
        if consumed == line.dedented {
            line.original
        } else {
            line.original + line.prefix + (consumed - line.dedented)
        }
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
