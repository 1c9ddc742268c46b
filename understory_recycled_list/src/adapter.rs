// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data-source contract consumed by [`RecycledList`](crate::RecycledList).

use crate::Scalar;

/// A data source that knows how many items exist and how to paint one into a row.
///
/// The list never owns item data. It asks the adapter for the item count and a
/// uniform row height, asks it to allocate rows when the pool is empty, and asks
/// it to bind a row to an item index whenever that row's content must change.
///
/// Methods take `&mut self` so adapters can keep caches (icons, formatted
/// strings) without interior mutability. They must not call back into the
/// list that is driving them.
pub trait ListAdapter {
    /// Scalar type used for item height and offsets.
    type Scalar: Scalar;

    /// Opaque handle for one visual row (a widget id, a node key, a struct).
    type Row;

    /// Number of items. Must stay stable for the duration of one list update.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniform row height, in the same units as the scroll offset.
    ///
    /// Must be finite and positive. The list reads it once on construction and
    /// again on [`RecycledList::item_height_changed`](crate::RecycledList::item_height_changed);
    /// any other value makes the list render no rows.
    fn item_height(&self) -> Self::Scalar;

    /// Allocates a fresh row. Only called when the row pool is empty.
    fn create_row(&mut self) -> Self::Row;

    /// Paints item `index` into `row`.
    ///
    /// Must be idempotent and only touch the row's own visual state.
    fn bind_row(&mut self, row: &mut Self::Row, index: usize);

    /// Called whenever a row is taken from the pool (or created) for `index`.
    ///
    /// `offset` is the row's distance from the start of the content, i.e.
    /// `index * item_height`. Hosts typically make the row visible and move it
    /// here. Content is bound separately through [`ListAdapter::bind_row`].
    fn show_row(&mut self, row: &mut Self::Row, index: usize, offset: Self::Scalar) {
        let _ = (row, index, offset);
    }

    /// Called whenever a row is returned to the pool.
    ///
    /// Hosts typically hide the row here. Its stale content is left in place
    /// and overwritten on the next bind.
    fn hide_row(&mut self, row: &mut Self::Row) {
        let _ = row;
    }
}
