//! Grapheme cluster classification.
//!
//! This module decides, for one grapheme cluster, whether it is a point where
//! the accumulator may split the text:
//!
//! - [`GraphemeClass`] - Classification of a single cluster
//! - [`Breakpoint`] - Hard or soft break, with the emphasis flag
//!
//! All breakpoint characters are single code points, so a cluster made of
//! more than one code point is never a breakpoint.

/// Sentence terminators and line separators.
const HARD_BREAKS: &[char] = &[
    '.', '。', '?', '？', '!', '！', '…', '⋯', '～', '~', '「', '」', '\n', '\t', '\r',
];

/// Clause separators.
const SOFT_BREAKS: &[char] = &[
    ',', '，', '、', '–', '—', ':', '：', ';', '；', '《', '》',
];

/// Hard breaks that stay attached to the chunk they end at a limit split.
const EMPHASIS_MARKS: &[char] = &['?', '？', '!', '！'];

/// A point where a chunk may end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Breakpoint {
    /// Always terminates the chunk in progress.
    Hard {
        /// `? ？ ! ！`
        emphasis: bool,
    },
    /// Terminates the chunk only under boost or word-count pressure.
    Soft,
}

impl Breakpoint {
    /// Classifies a single character, returning `None` for non-breakpoints.
    pub(crate) fn of(c: char) -> Option<Self> {
        if HARD_BREAKS.contains(&c) {
            Some(Breakpoint::Hard {
                emphasis: EMPHASIS_MARKS.contains(&c),
            })
        } else if SOFT_BREAKS.contains(&c) {
            Some(Breakpoint::Soft)
        } else {
            None
        }
    }

    pub(crate) fn is_hard(self) -> bool {
        matches!(self, Breakpoint::Hard { .. })
    }

    pub(crate) fn is_emphasis(self) -> bool {
        matches!(self, Breakpoint::Hard { emphasis: true })
    }
}

/// Classification of one grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GraphemeClass {
    /// A single-code-point breakpoint.
    Break(char, Breakpoint),
    /// A single ASCII digit.
    Digit,
    /// Any other single code point.
    Plain,
    /// A cluster of two or more code points.
    Cluster,
}

impl GraphemeClass {
    /// Classifies one grapheme cluster.
    ///
    /// Anything not recognized is plain content; classification never fails.
    pub(crate) fn of(grapheme: &str) -> Self {
        let mut chars = grapheme.chars();
        let Some(c) = chars.next() else {
            return GraphemeClass::Plain;
        };
        if chars.next().is_some() {
            return GraphemeClass::Cluster;
        }

        if c.is_ascii_digit() {
            GraphemeClass::Digit
        } else if let Some(kind) = Breakpoint::of(c) {
            GraphemeClass::Break(c, kind)
        } else {
            GraphemeClass::Plain
        }
    }
}

/// Returns true for `.` and `,`, which are elided between two digits.
pub(crate) fn is_decimal_separator(c: char) -> bool {
    matches!(c, '.' | ',')
}
