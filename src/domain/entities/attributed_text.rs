//! Attributed text value object: a finished string plus style ranges.

use std::fmt;
use std::ops::Range;

use super::ColorRef;

/// Visual style attached to a span of text.
#[derive(Debug, Clone, PartialEq)]
pub enum TextStyle {
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
    /// Font size relative to the surrounding text.
    RelativeSize(f32),
    /// Foreground color, passed through from the theme.
    ForegroundColor(ColorRef),
}

/// Half-open byte range over an [`AttributedText`] carrying one style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRange {
    start: usize,
    end: usize,
    style: TextStyle,
}

impl StyleRange {
    /// Start offset (inclusive).
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Covered offsets as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Style tag.
    #[must_use]
    pub const fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Zero-length ranges are legal but have no visual effect.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    const fn covers(&self, span: &Range<usize>) -> bool {
        !self.is_empty() && self.start <= span.start && span.end <= self.end
    }
}

/// A run of text sharing one set of active styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    /// Text of the run.
    pub text: &'a str,
    /// Styles active over the whole run, in insertion order.
    pub styles: Vec<&'a TextStyle>,
}

/// Plain string with an ordered set of style ranges.
///
/// Offsets are UTF-8 byte offsets into [`AttributedText::text`] and always
/// satisfy `start <= end <= text.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributedText {
    text: String,
    ranges: Vec<StyleRange>,
}

impl AttributedText {
    /// Creates unstyled text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Starts building attributed text.
    #[must_use]
    pub fn builder() -> AttributedTextBuilder {
        AttributedTextBuilder::default()
    }

    /// Composed plain content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style ranges in insertion order.
    #[must_use]
    pub fn ranges(&self) -> &[StyleRange] {
        &self.ranges
    }

    /// Length of the text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if there is no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the substring covered by a style range.
    #[must_use]
    pub fn slice(&self, range: &StyleRange) -> &str {
        &self.text[range.range()]
    }

    /// Splits the text into maximal runs with identical active styles.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut bounds: Vec<usize> = vec![0, self.text.len()];
        for range in &self.ranges {
            bounds.push(range.start);
            bounds.push(range.end);
        }
        bounds.sort_unstable();
        bounds.dedup();

        let mut runs: Vec<(Range<usize>, Vec<&TextStyle>)> = Vec::new();
        for pair in bounds.windows(2) {
            let span = pair[0]..pair[1];
            let styles: Vec<&TextStyle> = self
                .ranges
                .iter()
                .filter(|r| r.covers(&span))
                .map(StyleRange::style)
                .collect();

            match runs.last_mut() {
                Some((run, active)) if *active == styles => run.end = span.end,
                _ => runs.push((span, styles)),
            }
        }

        runs.into_iter()
            .map(|(span, styles)| Segment {
                text: &self.text[span],
                styles,
            })
            .collect()
    }
}

impl fmt::Display for AttributedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Append-only builder for [`AttributedText`].
#[derive(Debug, Default)]
pub struct AttributedTextBuilder {
    text: String,
    ranges: Vec<StyleRange>,
}

impl AttributedTextBuilder {
    /// Appends text and returns the span it occupies.
    pub fn append(&mut self, s: &str) -> Range<usize> {
        let start = self.text.len();
        self.text.push_str(s);
        start..self.text.len()
    }

    /// Appends a single character.
    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    /// Applies a style over `range`, clamped to the current length.
    pub fn apply(&mut self, style: TextStyle, range: Range<usize>) {
        let end = range.end.min(self.text.len());
        let start = range.start.min(end);
        debug_assert!(self.text.is_char_boundary(start) && self.text.is_char_boundary(end));
        self.ranges.push(StyleRange { start, end, style });
    }

    /// Current length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Finishes the value.
    #[must_use]
    pub fn build(self) -> AttributedText {
        AttributedText {
            text: self.text,
            ranges: self.ranges,
        }
    }
}
