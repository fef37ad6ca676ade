//! Source location spans.

use std::fmt;

/// Byte range `[start, end)` into the buffer a token was lexed from.
///
/// Layout: 8 bytes total. Offsets are relative to whatever buffer produced
/// the token — for window-scoped tokens that is the window slice, and the
/// window owner converts to absolute document offsets at the API edge.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span used for synthetic tokens (the end-of-stream sentinel).
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Byte length of the span.
    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start as usize..span.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn converts_to_range() {
        let range: std::ops::Range<usize> = Span::new(2, 9).into();
        assert_eq!(range, 2..9);
    }

    #[test]
    fn debug_is_compact() {
        assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
    }
}
