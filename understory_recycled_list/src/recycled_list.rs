// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller that binds a sliding window of item indices to pooled rows.

use alloc::collections::VecDeque;
use core::fmt;

use crate::{
    EdgeSlack, ListAdapter, ListConfig, RangeTransition, RowPool, Scalar, VisibleRange,
    compute_visible_range,
};

/// Alignment mode when scrolling a specific index into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlign {
    /// Align the top edge of the row with the top of the viewport.
    Start,
    /// Center the row within the viewport.
    Center,
    /// Align the bottom edge of the row with the bottom of the viewport.
    End,
    /// Move just enough to make the row fully visible, preferring the
    /// smallest change from the current scroll offset.
    Nearest,
}

/// What a single list update did to the bound rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUpdate {
    /// Rows returned to the pool.
    pub released: usize,
    /// Rows taken from the pool (or created) and shown.
    pub acquired: usize,
    /// Rows newly allocated through [`ListAdapter::create_row`].
    pub created: usize,
    /// Calls made to [`ListAdapter::bind_row`].
    pub bound: usize,
}

impl ListUpdate {
    /// Returns `true` if the update touched no row at all.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.released == 0 && self.acquired == 0 && self.bound == 0
    }
}

/// A recycled list view over a [`ListAdapter`].
///
/// The list keeps exactly one row bound to every index in its current
/// [`VisibleRange`] and nothing else. When the range moves, rows that fall out
/// of it go back to a [`RowPool`] and newly exposed indices take rows from
/// that pool, so scrolling costs work proportional to the number of rows that
/// entered or left the window rather than to the window size. Rows that stay in
/// the window keep their content until a full refresh is requested.
///
/// All methods run synchronously and the list never calls itself back; hosts
/// forward scroll, resize, and data-change events to the matching method:
///
/// | Host event             | Method                                     |
/// |------------------------|--------------------------------------------|
/// | scroll position moved  | [`RecycledList::set_scroll_offset`]        |
/// | viewport resized       | [`RecycledList::set_viewport_extent`]      |
/// | items changed          | [`RecycledList::data_set_changed`]         |
/// | row height changed     | [`RecycledList::item_height_changed`]      |
///
/// Construction binds nothing. Call [`RecycledList::data_set_changed`] for the
/// initial load.
pub struct RecycledList<A: ListAdapter> {
    adapter: A,
    pool: RowPool<A::Row>,
    // Rows for `range`, in index order: `bound[i]` shows item `range.top + i`.
    bound: VecDeque<A::Row>,
    range: Option<VisibleRange>,

    item_height: A::Scalar,
    scroll_offset: A::Scalar,
    viewport_extent: A::Scalar,
    slack: EdgeSlack<A::Scalar>,
}

impl<A: ListAdapter> fmt::Debug for RecycledList<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecycledList")
            .field("range", &self.range)
            .field("bound", &self.bound.len())
            .field("pooled", &self.pool.len())
            .field("item_height", &self.item_height)
            .field("scroll_offset", &self.scroll_offset)
            .field("viewport_extent", &self.viewport_extent)
            .field("slack", &self.slack)
            .finish_non_exhaustive()
    }
}

impl<A: ListAdapter> RecycledList<A> {
    /// Creates a list over `adapter` with the given viewport height and default slack.
    #[must_use]
    pub fn new(adapter: A, viewport_extent: A::Scalar) -> Self {
        Self::with_config(adapter, ListConfig::new(viewport_extent))
    }

    /// Creates a list over `adapter` from a [`ListConfig`].
    #[must_use]
    pub fn with_config(adapter: A, config: ListConfig<A::Scalar>) -> Self {
        let item_height = checked_item_height(adapter.item_height());
        Self {
            adapter,
            pool: RowPool::new(),
            bound: VecDeque::new(),
            range: None,
            item_height,
            scroll_offset: A::Scalar::zero(),
            viewport_extent: config.viewport_extent.max(A::Scalar::zero()),
            slack: EdgeSlack::new(config.slack.before, config.slack.after),
        }
    }

    /// Returns a shared reference to the adapter.
    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Returns a mutable reference to the adapter.
    ///
    /// Changing the item count or content through this reference is not
    /// observed until [`RecycledList::data_set_changed`] is called.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> A::Scalar {
        self.scroll_offset
    }

    /// Returns the current viewport height.
    #[must_use]
    pub const fn viewport_extent(&self) -> A::Scalar {
        self.viewport_extent
    }

    /// Returns the item height last read from the adapter.
    #[must_use]
    pub const fn item_height(&self) -> A::Scalar {
        self.item_height
    }

    /// Returns the slack applied around the viewport.
    #[must_use]
    pub const fn slack(&self) -> EdgeSlack<A::Scalar> {
        self.slack
    }

    /// The range of indices that currently have bound rows, if any.
    #[must_use]
    pub const fn visible_range(&self) -> Option<VisibleRange> {
        self.range
    }

    /// Returns the first index with a bound row, if any.
    #[must_use]
    pub fn first_visible_index(&self) -> Option<usize> {
        self.range.map(|range| range.top)
    }

    /// Returns the last index with a bound row, if any.
    #[must_use]
    pub fn last_visible_index(&self) -> Option<usize> {
        self.range.map(|range| range.bottom)
    }

    /// Number of rows waiting in the pool.
    #[must_use]
    pub fn pooled_rows(&self) -> usize {
        self.pool.len()
    }

    /// Total number of rows ever created through the adapter.
    #[must_use]
    pub const fn allocated_rows(&self) -> usize {
        self.pool.allocated()
    }

    /// Returns the row bound to `index`, if that index is in the visible range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&A::Row> {
        let range = self.range?;
        if !range.contains(index) {
            return None;
        }
        self.bound.get(index - range.top)
    }

    /// Returns the row bound to `index` mutably, if that index is in the visible range.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut A::Row> {
        let range = self.range?;
        if !range.contains(index) {
            return None;
        }
        self.bound.get_mut(index - range.top)
    }

    /// Iterator over `(index, row)` for every bound row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &A::Row)> {
        let top = self.range.map_or(0, |range| range.top);
        self.bound
            .iter()
            .enumerate()
            .map(move |(i, row)| (top + i, row))
    }

    /// Mutable iterator over `(index, row)` for every bound row, top to bottom.
    ///
    /// Useful for restyling rows (for example a selection highlight) without
    /// going through a full rebind.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut A::Row)> {
        let top = self.range.map_or(0, |range| range.top);
        self.bound
            .iter_mut()
            .enumerate()
            .map(move |(i, row)| (top + i, row))
    }

    /// Distance from the start of the content to the top of row `index`.
    #[must_use]
    pub fn row_offset(&self, index: usize) -> A::Scalar {
        A::Scalar::from_usize(index) * self.item_height
    }

    /// Total height of the content, never less than one unit.
    ///
    /// Hosts size their scroll container's content with this.
    #[must_use]
    pub fn content_extent(&self) -> A::Scalar {
        (A::Scalar::from_usize(self.adapter.len()) * self.item_height).max(A::Scalar::one())
    }

    /// Returns the index of the item under `offset` in content coordinates.
    ///
    /// Returns `None` for offsets before the content or in the free space past
    /// the last item.
    #[must_use]
    pub fn index_at_offset(&self, offset: A::Scalar) -> Option<usize> {
        if !offset.is_finite() || offset.is_sign_negative() || self.item_height <= A::Scalar::zero()
        {
            return None;
        }
        let index = usize::try_from((offset / self.item_height).floor_to_isize()).ok()?;
        (index < self.adapter.len()).then_some(index)
    }

    /// Returns `true` if row `index` lies entirely within the viewport.
    #[must_use]
    pub fn is_index_fully_visible(&self, index: usize) -> bool {
        if index >= self.adapter.len() {
            return false;
        }
        let item_start = self.row_offset(index);
        let item_end = item_start + self.item_height;
        let view_end = self.scroll_offset + self.viewport_extent;
        item_start >= self.scroll_offset && item_end <= view_end
    }

    /// Returns `true` if row `index` overlaps the viewport at all.
    #[must_use]
    pub fn is_index_partially_visible(&self, index: usize) -> bool {
        if index >= self.adapter.len() {
            return false;
        }
        let item_start = self.row_offset(index);
        let item_end = item_start + self.item_height;
        let view_end = self.scroll_offset + self.viewport_extent;
        item_end > self.scroll_offset && item_start < view_end
    }

    /// Handles a scroll position change.
    pub fn set_scroll_offset(&mut self, offset: A::Scalar) -> ListUpdate {
        self.scroll_offset = offset.max(A::Scalar::zero());
        self.update_list(false)
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: A::Scalar) -> ListUpdate {
        self.set_scroll_offset(self.scroll_offset + delta)
    }

    /// Handles a viewport resize.
    pub fn set_viewport_extent(&mut self, extent: A::Scalar) -> ListUpdate {
        self.viewport_extent = extent.max(A::Scalar::zero());
        self.update_list(false)
    }

    /// Replaces the slack applied around the viewport.
    pub fn set_slack(&mut self, slack: EdgeSlack<A::Scalar>) -> ListUpdate {
        self.slack = EdgeSlack::new(slack.before, slack.after);
        self.update_list(false)
    }

    /// Handles a change in the item count and/or item contents.
    ///
    /// Every row in the resulting range is rebound.
    pub fn data_set_changed(&mut self) -> ListUpdate {
        self.update_list(true)
    }

    /// Handles a change in row height.
    ///
    /// Re-reads [`ListAdapter::item_height`], releases every bound row so each
    /// one is shown again at its new offset, and rebinds the new range.
    pub fn item_height_changed(&mut self) -> ListUpdate {
        let released = self.release_all();
        self.item_height = checked_item_height(self.adapter.item_height());
        let mut update = self.update_list(true);
        update.released += released;
        update
    }

    /// Returns every bound row to the pool, leaving the list empty.
    ///
    /// Returns the number of rows released.
    pub fn release_all(&mut self) -> usize {
        let released = self.bound.len();
        while let Some(row) = self.bound.pop_front() {
            self.release_row(row);
        }
        self.range = None;
        released
    }

    /// Scrolls so that row `index` is brought into view using the given alignment.
    ///
    /// Indices past the end are clamped to the last item. An empty list scrolls
    /// back to the top.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> ListUpdate {
        let len = self.adapter.len();
        if len == 0 {
            return self.set_scroll_offset(A::Scalar::zero());
        }
        let item_start = self.row_offset(index.min(len - 1));
        let item_end = item_start + self.item_height;
        let viewport = self.viewport_extent;

        let new_offset = match align {
            ScrollAlign::Start => item_start,
            ScrollAlign::End => (item_end - viewport).max(A::Scalar::zero()),
            ScrollAlign::Center => {
                let half = A::Scalar::from_usize(2);
                ((item_start + item_end) / half - viewport / half).max(A::Scalar::zero())
            }
            ScrollAlign::Nearest => {
                let current = self.scroll_offset;
                if item_start >= current && item_end <= current + viewport {
                    current
                } else if item_start < current {
                    item_start
                } else {
                    (item_end - viewport).max(A::Scalar::zero())
                }
            }
        };

        self.set_scroll_offset(new_offset)
    }

    /// Clamps the scroll offset so the viewport stays within the content.
    pub fn clamp_scroll_to_content(&mut self) -> ListUpdate {
        let content = self.content_extent();
        let max_offset = if content > self.viewport_extent {
            content - self.viewport_extent
        } else {
            A::Scalar::zero()
        };
        self.set_scroll_offset(self.scroll_offset.min(max_offset))
    }

    /// Recomputes the visible range and moves rows to match it.
    ///
    /// Rows that leave the range are released and newly exposed indices get a
    /// row from the pool and are bound. Rows that stay in the range are left
    /// untouched unless `force_full_refresh` is set, in which case every row in
    /// the new range is rebound. A full refresh is implied on the first paint
    /// after the list was empty and on jumps where the old and new ranges do
    /// not overlap.
    ///
    /// The adapter's item count is read once per call.
    pub fn update_list(&mut self, force_full_refresh: bool) -> ListUpdate {
        let len = self.adapter.len();
        let new_range = compute_visible_range(
            len,
            self.item_height,
            self.scroll_offset,
            self.viewport_extent,
            self.slack,
        );

        let mut update = ListUpdate::default();
        let mut full_refresh = force_full_refresh;

        match (self.range, new_range) {
            (None, None) => {}
            (Some(_), None) => {
                update.released += self.release_all();
            }
            (None, Some(new)) => {
                full_refresh = true;
                for index in new.indices() {
                    let row = self.acquire_row(index, &mut update);
                    self.bound.push_back(row);
                }
            }
            (Some(old), Some(new)) => match RangeTransition::between(old, new) {
                RangeTransition::Disjoint => {
                    full_refresh = true;
                    update.released += self.release_all();
                    for index in new.indices() {
                        let row = self.acquire_row(index, &mut update);
                        self.bound.push_back(row);
                    }
                }
                RangeTransition::Overlapping {
                    release_front,
                    release_back,
                    acquire_front,
                    acquire_back,
                } => {
                    for _ in 0..release_front {
                        if let Some(row) = self.bound.pop_front() {
                            self.release_row(row);
                        }
                    }
                    for _ in 0..release_back {
                        if let Some(row) = self.bound.pop_back() {
                            self.release_row(row);
                        }
                    }
                    update.released += release_front + release_back;

                    // Walk upwards so each new row lands directly above the previous one.
                    for index in (new.top..new.top + acquire_front).rev() {
                        let mut row = self.acquire_row(index, &mut update);
                        if !full_refresh {
                            self.adapter.bind_row(&mut row, index);
                            update.bound += 1;
                        }
                        self.bound.push_front(row);
                    }
                    for index in old.bottom + 1..old.bottom + 1 + acquire_back {
                        let mut row = self.acquire_row(index, &mut update);
                        if !full_refresh {
                            self.adapter.bind_row(&mut row, index);
                            update.bound += 1;
                        }
                        self.bound.push_back(row);
                    }
                }
            },
        }

        self.range = new_range;
        debug_assert_eq!(
            self.bound.len(),
            self.range.map_or(0, |range| range.len()),
            "every index in the visible range must have exactly one bound row"
        );

        if full_refresh {
            if let Some(range) = self.range {
                for (row, index) in self.bound.iter_mut().zip(range.indices()) {
                    self.adapter.bind_row(row, index);
                    update.bound += 1;
                }
            }
        }

        tracing::trace!(
            range = ?self.range,
            released = update.released,
            acquired = update.acquired,
            created = update.created,
            bound = update.bound,
            full_refresh,
            "recycled list updated"
        );

        update
    }

    fn acquire_row(&mut self, index: usize, update: &mut ListUpdate) -> A::Row {
        let allocated = self.pool.allocated();
        let mut row = self.pool.acquire(|| self.adapter.create_row());
        update.created += self.pool.allocated() - allocated;
        update.acquired += 1;

        let offset = self.row_offset(index);
        self.adapter.show_row(&mut row, index, offset);
        row
    }

    fn release_row(&mut self, mut row: A::Row) {
        self.adapter.hide_row(&mut row);
        self.pool.release(row);
    }
}

fn checked_item_height<S: Scalar>(item_height: S) -> S {
    if item_height.is_finite() && item_height > S::zero() {
        item_height
    } else {
        tracing::warn!(
            ?item_height,
            "list adapter reported an item height that is not finite and positive; no rows will be shown"
        );
        S::zero()
    }
}
