// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible window tracking: which contiguous indices need a bound row.

use core::ops::RangeInclusive;

use crate::Scalar;

/// A non-empty, contiguous range of item indices, inclusive on both ends.
///
/// The absence of a range (no items, or no usable item height) is expressed
/// as `Option<VisibleRange>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// First index with a bound row.
    pub top: usize,
    /// Last index with a bound row.
    pub bottom: usize,
}

impl VisibleRange {
    /// Creates a range covering `top..=bottom`.
    #[must_use]
    pub const fn new(top: usize, bottom: usize) -> Self {
        debug_assert!(top <= bottom, "VisibleRange requires top <= bottom");
        Self { top, bottom }
    }

    /// Number of indices in the range. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Returns `true` if `index` lies within the range.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.top && index <= self.bottom
    }

    /// Returns `true` if the two ranges share at least one index.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        !(other.bottom < self.top || other.top > self.bottom)
    }

    /// Iterator over the indices in the range, top to bottom.
    #[must_use]
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.top..=self.bottom
    }
}

/// Extra margin applied around the viewport when computing the visible range.
///
/// Scroll positions are fractional, so a row sitting exactly on the viewport
/// edge would otherwise flicker in and out between frames. `before` is
/// subtracted from the scroll offset and `after` is added past the far edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSlack<S: Scalar> {
    /// Slack before the leading edge of the viewport.
    pub before: S,
    /// Slack past the trailing edge of the viewport.
    pub after: S,
}

impl<S: Scalar> EdgeSlack<S> {
    /// Creates a slack pair. Negative values are clamped to zero.
    #[must_use]
    pub fn new(before: S, after: S) -> Self {
        Self {
            before: before.max(S::zero()),
            after: after.max(S::zero()),
        }
    }

    /// No slack on either edge.
    #[must_use]
    pub fn none() -> Self {
        Self {
            before: S::zero(),
            after: S::zero(),
        }
    }
}

impl<S: Scalar> Default for EdgeSlack<S> {
    /// One unit before the viewport and two units past it.
    fn default() -> Self {
        Self {
            before: S::one(),
            after: S::from_usize(2),
        }
    }
}

/// Computes the contiguous index range that must have bound rows.
///
/// - `len`: number of items.
/// - `item_height`: uniform row height; must be finite and positive.
/// - `scroll_offset`: distance from the start of the content to the top of the viewport.
/// - `viewport_extent`: height of the viewport.
/// - `slack`: extra margin around the viewport, see [`EdgeSlack`].
///
/// Both ends are floored and then clamped into `0..len`, so the result always
/// satisfies `top <= bottom < len`. Returns `None` when `len == 0` or when
/// `item_height` is unusable.
#[must_use]
pub fn compute_visible_range<S: Scalar>(
    len: usize,
    item_height: S,
    scroll_offset: S,
    viewport_extent: S,
    slack: EdgeSlack<S>,
) -> Option<VisibleRange> {
    if len == 0 || !item_height.is_finite() || item_height <= S::zero() {
        return None;
    }

    let scroll_offset = if scroll_offset.is_finite() {
        scroll_offset
    } else {
        S::zero()
    };
    let viewport_extent = viewport_extent.max(S::zero());
    let before = slack.before.max(S::zero());
    let after = slack.after.max(S::zero());

    let content_pos = scroll_offset - before;
    let top = (content_pos / item_height).floor_to_isize();
    let bottom = ((content_pos + viewport_extent + after) / item_height).floor_to_isize();

    #[allow(
        clippy::cast_possible_wrap,
        reason = "Item counts never approach isize::MAX"
    )]
    let last = (len - 1) as isize;
    #[allow(
        clippy::cast_sign_loss,
        reason = "Both ends are clamped into 0..=last before the cast"
    )]
    let (top, bottom) = (top.clamp(0, last) as usize, bottom.clamp(0, last) as usize);

    Some(VisibleRange::new(top, bottom.max(top)))
}

/// How the bound rows must change to move from one range to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTransition {
    /// The ranges share no index: every old row is released and every new
    /// index is acquired.
    Disjoint,
    /// The ranges share at least one index. Counts are in rows.
    Overlapping {
        /// Rows to release from the top of the old range.
        release_front: usize,
        /// Rows to release from the bottom of the old range.
        release_back: usize,
        /// Rows to acquire above the old range.
        acquire_front: usize,
        /// Rows to acquire below the old range.
        acquire_back: usize,
    },
}

impl RangeTransition {
    /// Classifies the change from `old` to `new`.
    #[must_use]
    pub const fn between(old: VisibleRange, new: VisibleRange) -> Self {
        if !old.overlaps(&new) {
            return Self::Disjoint;
        }
        Self::Overlapping {
            release_front: new.top.saturating_sub(old.top),
            release_back: old.bottom.saturating_sub(new.bottom),
            acquire_front: old.top.saturating_sub(new.top),
            acquire_back: new.bottom.saturating_sub(old.bottom),
        }
    }

    /// Returns `true` if no row needs to move.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(
            self,
            Self::Overlapping {
                release_front: 0,
                release_back: 0,
                acquire_front: 0,
                acquire_back: 0,
            }
        )
    }
}
