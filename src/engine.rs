//! Slide navigation: anchor clamping, pixel offsets and boundary policy.
//!
//! The engine owns a [`SlideSet`] and the anchor index of the leftmost
//! visible slide. Every transition is a [`NavigationEngine::go_to`];
//! `next`/`prev` are ±1 steps guarded at the edges. State is committed
//! synchronously before the call returns, so a renderer may start the next
//! transform while a previous animation is still running.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Error;
use crate::events::NavRequest;
use crate::layout;
use crate::slides::SlideSet;

/// Edge of the track a navigation request ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    /// Direction name used for the renderer's bump class (`bump-left`/`bump-right`).
    #[must_use]
    pub const fn bump_direction(self) -> &'static str {
        match self {
            Self::Start => "left",
            Self::End => "right",
        }
    }
}

/// A committed move: where the track is anchored now and how far it moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavigationResult {
    pub new_index: usize,
    /// Total translation to apply to the track (`translateX`).
    pub applied_offset: f64,
    /// Signed change from the previous translation; negative moves left.
    pub delta: f64,
}

/// Result of every navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Outcome {
    Moved(NavigationResult),
    /// Nothing to do: same effective slide, or an undefined target.
    NoOp,
    /// A `next`/`prev` step was refused at an edge; state unchanged.
    BoundaryReached { edge: Edge },
}

impl Outcome {
    #[must_use]
    pub const fn moved(&self) -> Option<&NavigationResult> {
        match self {
            Self::Moved(res) => Some(res),
            _ => None,
        }
    }
}

/// Convert a loosely typed index (e.g. parsed from markup) into a request
/// target. NaN and infinities are undefined; finite values truncate toward
/// zero.
#[must_use]
pub fn index_from_f64(raw: f64) -> Option<isize> {
    if !raw.is_finite() {
        return None;
    }
    let t = raw.trunc();
    if t >= isize::MAX as f64 {
        Some(isize::MAX)
    } else if t <= isize::MIN as f64 {
        Some(isize::MIN)
    } else {
        Some(t as isize)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationEngine {
    slides: SlideSet,
    items_per_slide: usize,
    current_index: usize,
    offset: f64,
}

impl NavigationEngine {
    /// Engine anchored at slide 0 with no translation.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] unless
    /// `1 <= items_per_slide <= slides.count()`.
    pub fn new(slides: SlideSet, items_per_slide: usize) -> Result<Self, Error> {
        Self::with_start(slides, items_per_slide, 0)
    }

    /// Engine anchored at `start_index`, clamped like any other target.
    ///
    /// # Errors
    /// Same as [`NavigationEngine::new`].
    pub fn with_start(
        slides: SlideSet,
        items_per_slide: usize,
        start_index: usize,
    ) -> Result<Self, Error> {
        validate_items_per_slide(&slides, items_per_slide)?;
        let mut engine = Self {
            slides,
            items_per_slide,
            current_index: 0,
            offset: 0.0,
        };
        let anchor = engine.clamp_target(to_isize(start_index));
        engine.current_index = anchor;
        engine.offset = engine.slides.offset_at(anchor);
        debug!(
            slides = engine.slides.count(),
            items_per_slide,
            anchor,
            "navigation engine created"
        );
        Ok(engine)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn items_per_slide(&self) -> usize {
        self.items_per_slide
    }

    #[must_use]
    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    /// Largest valid anchor: the last slide sits flush with the right edge.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.slides.count() - self.items_per_slide
    }

    /// Number of valid anchor positions; dot `i` maps to `go_to(i)`.
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Slides currently in the viewport window.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        layout::visible_range(
            self.current_index,
            self.items_per_slide,
            self.slides.count(),
        )
    }

    /// `min(requested, max_index)`, floored at zero.
    #[must_use]
    pub fn clamp_target(&self, requested: isize) -> usize {
        let max = to_isize(self.max_index());
        // Non-negative after the floor, so the cast is lossless.
        requested.min(max).max(0) as usize
    }

    /// Move the anchor to `requested` (clamped).
    ///
    /// Forward moves sum the widths of `[previous, target)`; backward moves
    /// sum `[target, previous)`. The sum is the distance travelled for any
    /// gap, not just single steps.
    pub fn go_to(&mut self, requested: isize) -> Outcome {
        let target = self.clamp_target(requested);
        let previous = self.current_index;
        if target == previous {
            debug!(requested, anchor = previous, "navigation target unchanged");
            return Outcome::NoOp;
        }

        let forward = previous < target;
        let range = if forward {
            previous..target
        } else {
            target..previous
        };
        let distance = self.slides.span_within(range);
        let delta = if forward { 0.0 - distance } else { distance };

        self.current_index = target;
        // Re-anchor to the prefix sum instead of accumulating `delta`, so the
        // offset stays exactly -sum(widths[0..target]).
        self.offset = self.slides.offset_at(target);

        debug!(
            from = previous,
            to = target,
            delta,
            offset = self.offset,
            "navigated"
        );
        Outcome::Moved(NavigationResult {
            new_index: target,
            applied_offset: self.offset,
            delta,
        })
    }

    /// `go_to` for a possibly undefined target; `None` is a silent no-op.
    pub fn go_to_requested(&mut self, requested: Option<isize>) -> Outcome {
        match requested {
            Some(index) => self.go_to(index),
            None => {
                debug!("undefined navigation target ignored");
                Outcome::NoOp
            }
        }
    }

    pub fn next(&mut self) -> Outcome {
        if self.current_index < self.max_index() {
            self.go_to(to_isize(self.current_index + 1))
        } else {
            warn!(anchor = self.current_index, "cannot go to next slide past the last one");
            Outcome::BoundaryReached { edge: Edge::End }
        }
    }

    pub fn prev(&mut self) -> Outcome {
        if self.current_index > 0 {
            self.go_to(to_isize(self.current_index - 1))
        } else {
            warn!("cannot go to previous slide past 0");
            Outcome::BoundaryReached { edge: Edge::Start }
        }
    }

    pub fn apply(&mut self, request: NavRequest) -> Outcome {
        match request {
            NavRequest::GoTo(index) => self.go_to_requested(index),
            NavRequest::Next => self.next(),
            NavRequest::Prev => self.prev(),
        }
    }

    /// Replace the slide set after slides were added, removed or re-measured.
    ///
    /// The anchor is re-clamped against the new set and the offset recomputed.
    /// On error the engine keeps its previous slides and state.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] if `items_per_slide` exceeds the
    /// new slide count.
    pub fn rebuild(&mut self, slides: SlideSet) -> Result<Outcome, Error> {
        validate_items_per_slide(&slides, self.items_per_slide)?;

        let previous_index = self.current_index;
        let previous_offset = self.offset;
        self.slides = slides;
        self.current_index = self.clamp_target(to_isize(previous_index));
        self.offset = self.slides.offset_at(self.current_index);

        debug!(
            slides = self.slides.count(),
            from = previous_index,
            to = self.current_index,
            offset = self.offset,
            "slide set rebuilt"
        );

        if self.current_index == previous_index && self.offset == previous_offset {
            return Ok(Outcome::NoOp);
        }
        Ok(Outcome::Moved(NavigationResult {
            new_index: self.current_index,
            applied_offset: self.offset,
            delta: self.offset - previous_offset,
        }))
    }
}

fn validate_items_per_slide(slides: &SlideSet, items_per_slide: usize) -> Result<(), Error> {
    if items_per_slide < 1 {
        return Err(Error::InvalidConfiguration(
            "items per slide must be at least 1".into(),
        ));
    }
    if items_per_slide > slides.count() {
        return Err(Error::InvalidConfiguration(format!(
            "items per slide ({items_per_slide}) exceeds slide count ({})",
            slides.count()
        )));
    }
    Ok(())
}

fn to_isize(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
