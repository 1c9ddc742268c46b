// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row geometry in `kurbo` types, for hosts that lay out rows with `kurbo`.

use kurbo::{Rect, Size};

use crate::{ListAdapter, RecycledList, Scalar};

impl<A: ListAdapter> RecycledList<A> {
    /// Content-space rectangle of row `index` for a list `width` wide.
    ///
    /// Returns `None` if `index` is past the last item.
    #[must_use]
    pub fn row_rect(&self, index: usize, width: f64) -> Option<Rect> {
        if index >= self.adapter().len() {
            return None;
        }
        let y0 = self.row_offset(index).to_f64();
        let y1 = y0 + self.item_height().to_f64();
        Some(Rect::new(0.0, y0, width.max(0.0), y1))
    }

    /// Content-space rectangles of every bound row, top to bottom.
    pub fn visible_row_rects(&self, width: f64) -> impl Iterator<Item = (usize, Rect)> {
        self.rows()
            .filter_map(move |(index, _)| Some((index, self.row_rect(index, width)?)))
    }

    /// Size of the scrollable content for a list `width` wide.
    #[must_use]
    pub fn content_size(&self, width: f64) -> Size {
        Size::new(width.max(0.0), self.content_extent().to_f64())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Rect, Size};

    use crate::{ListAdapter, RecycledList};

    struct Labels(usize);

    impl ListAdapter for Labels {
        type Scalar = f64;
        type Row = Option<usize>;

        fn len(&self) -> usize {
            self.0
        }

        fn item_height(&self) -> f64 {
            20.0
        }

        fn create_row(&mut self) -> Option<usize> {
            None
        }

        fn bind_row(&mut self, row: &mut Option<usize>, index: usize) {
            *row = Some(index);
        }
    }

    #[test]
    fn rects_follow_row_offsets() {
        let mut list = RecycledList::new(Labels(50), 50.0);
        list.data_set_changed();
        list.set_scroll_offset(100.0);

        assert_eq!(list.row_rect(3, 200.0), Some(Rect::new(0.0, 60.0, 200.0, 80.0)));
        assert_eq!(list.row_rect(50, 200.0), None);
        assert_eq!(list.content_size(200.0), Size::new(200.0, 1_000.0));

        let rects: Vec<(usize, Rect)> = list.visible_row_rects(10.0).collect();
        // floor(99 / 20) = 4, floor(151 / 20) = 7.
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0], (4, Rect::new(0.0, 80.0, 10.0, 100.0)));
    }
}
