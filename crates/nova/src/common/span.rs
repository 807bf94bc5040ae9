//! Byte-offset source spans

use std::ops::Range;

/// Half-open byte range `start..end` into a source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Shift both ends by `offset` bytes
    pub fn offset(self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Span::new(1, 3).offset(10), Span::new(11, 13));
    }

    #[test]
    fn test_range_conversion() {
        let span: Span = (2..9).into();
        let range: Range<usize> = span.into();
        assert_eq!(range, 2..9);
    }
}
