//! Immutable set of measured slide widths.

use std::ops::Range;

use crate::error::Error;

/// Ordered slide widths in pixels, fixed at construction.
///
/// A set is never patched: when slides are added, removed or re-measured the
/// caller builds a new one and hands it to
/// [`NavigationEngine::rebuild`](crate::engine::NavigationEngine::rebuild).
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet {
    widths: Vec<f64>,
    // prefix[i] == sum(widths[0..i]); one entry longer than `widths`.
    prefix: Vec<f64>,
}

impl SlideSet {
    /// Construct a set from measured widths.
    ///
    /// A width of zero (hidden container) is accepted.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `widths` is empty or any
    /// width is negative or not finite.
    pub fn new(widths: Vec<f64>) -> Result<Self, Error> {
        if widths.is_empty() {
            return Err(Error::InvalidConfiguration(
                "slide set must contain at least one slide".into(),
            ));
        }
        if let Some((index, width)) = widths
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "slide {index} has invalid width {width}"
            )));
        }

        let mut prefix = Vec::with_capacity(widths.len() + 1);
        let mut acc = 0.0;
        prefix.push(acc);
        for w in &widths {
            acc += w;
            prefix.push(acc);
        }
        Ok(Self { widths, prefix })
    }

    /// Number of slides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.widths.len()
    }

    /// Width of the slide at `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index >= count()`.
    pub fn width_of(&self, index: usize) -> Result<f64, Error> {
        self.widths
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Borrow all widths (read-only).
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// Sum of widths over the half-open `range`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if the range reaches past the last
    /// slide boundary.
    pub fn span(&self, range: Range<usize>) -> Result<f64, Error> {
        if range.start >= range.end {
            return Ok(0.0);
        }
        let end = self.boundary(range.end)?;
        let start = self.boundary(range.start)?;
        Ok(end - start)
    }

    /// Track translation that puts slide `anchor` flush with the left edge.
    ///
    /// Always `-sum(widths[0..anchor])`; `anchor == count()` is allowed.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `anchor > count()`.
    pub fn offset_of(&self, anchor: usize) -> Result<f64, Error> {
        Ok(0.0 - self.boundary(anchor)?)
    }

    // Offsets subtract from +0.0 rather than negate, so anchor 0 is never -0.0.
    // Infallible variants for callers that already hold indices within
    // `0..=count()`; out-of-range boundaries clamp to the end.
    pub(crate) fn offset_at(&self, anchor: usize) -> f64 {
        0.0 - self.prefix[anchor.min(self.count())]
    }

    pub(crate) fn span_within(&self, range: Range<usize>) -> f64 {
        let end = range.end.min(self.count());
        let start = range.start.min(end);
        self.prefix[end] - self.prefix[start]
    }

    fn boundary(&self, index: usize) -> Result<f64, Error> {
        self.prefix
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                count: self.count(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_table_matches_widths() {
        let set = SlideSet::new(vec![100.0, 150.0, 200.0]).unwrap();
        assert_eq!(set.prefix, vec![0.0, 100.0, 250.0, 450.0]);
    }

    #[test]
    fn empty_range_spans_nothing() {
        let set = SlideSet::new(vec![10.0, 20.0]).unwrap();
        assert_eq!(set.span(1..1).unwrap(), 0.0);
        assert_eq!(set.span(2..1).unwrap(), 0.0);
    }
}
