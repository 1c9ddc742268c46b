// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_recycled_list --heading-base-level=0

//! Understory Recycled List: windowed rendering over a pool of reusable rows.
//!
//! This crate drives a list view whose logical length can be far larger than
//! what fits on screen. Only the rows intersecting the viewport exist as bound
//! visual objects; as the viewport scrolls, rows that leave the window are
//! returned to a pool and handed back out for the indices that enter it.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for offsets, extents,
//!   and the uniform item height.
//! - [`ListAdapter`]: the data source. It reports the item count and row height,
//!   allocates rows on demand, and paints item `i` into a row.
//! - [`RowPool`]: a stack of released rows waiting to be reused.
//! - [`compute_visible_range`]: given scroll offset, viewport height, row height,
//!   and [`EdgeSlack`], returns the contiguous [`VisibleRange`] of indices that
//!   must have a bound row.
//! - [`RecycledList`]: the controller. On every scroll, resize, or data change
//!   it diffs the old range against the new one ([`RangeTransition`]), releases
//!   and acquires only the rows at the edges, and binds content only for rows
//!   whose index changed unless a full refresh is requested.
//!
//! This crate deliberately does **not** know about widgets, scene graphs, or any
//! particular UI framework. A row is whatever handle the host wants (a widget
//! id, a node key, a plain struct). Host frameworks are responsible for:
//!
//! - Forwarding scroll, resize, and data-change events to the list.
//! - Making rows visible and positioning them in [`ListAdapter::show_row`], and
//!   hiding them in [`ListAdapter::hide_row`].
//! - Sizing their scroll container with [`RecycledList::content_extent`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_recycled_list::{ListAdapter, RecycledList, VisibleRange};
//!
//! struct FileNames {
//!     names: Vec<&'static str>,
//! }
//!
//! #[derive(Default)]
//! struct Label {
//!     text: &'static str,
//!     y: f32,
//!     visible: bool,
//! }
//!
//! impl ListAdapter for FileNames {
//!     type Scalar = f32;
//!     type Row = Label;
//!
//!     fn len(&self) -> usize {
//!         self.names.len()
//!     }
//!
//!     fn item_height(&self) -> f32 {
//!         30.0
//!     }
//!
//!     fn create_row(&mut self) -> Label {
//!         Label::default()
//!     }
//!
//!     fn bind_row(&mut self, row: &mut Label, index: usize) {
//!         row.text = self.names[index];
//!     }
//!
//!     fn show_row(&mut self, row: &mut Label, _index: usize, offset: f32) {
//!         row.y = offset;
//!         row.visible = true;
//!     }
//!
//!     fn hide_row(&mut self, row: &mut Label) {
//!         row.visible = false;
//!     }
//! }
//!
//! let files = FileNames { names: vec!["notes.txt"; 10] };
//! let mut list = RecycledList::new(files, 100.0);
//!
//! // Initial load: rows for indices 0..=3 are created and bound.
//! list.data_set_changed();
//! assert_eq!(list.visible_range(), Some(VisibleRange::new(0, 3)));
//!
//! // Scrolling two rows down releases one row at the top and binds two at the bottom.
//! let update = list.set_scroll_offset(60.0);
//! assert_eq!(list.visible_range(), Some(VisibleRange::new(1, 5)));
//! assert_eq!((update.released, update.bound), (1, 2));
//! assert_eq!(list.row(5).map(|row| row.y), Some(150.0));
//! ```
//!
//! All offsets live in a caller-chosen 1D coordinate space (typically logical
//! pixels) and grow downwards from the top of the content.
//!
//! ## Features
//!
//! - `std` (default): enables `std` in dependencies.
//! - `kurbo`: row and content geometry as [`kurbo`](https://docs.rs/kurbo) types.
//! - `serde`: `Serialize`/`Deserialize` for [`ListConfig`] and [`EdgeSlack`].
//!
//! Updates emit a `tracing` event at `TRACE` level with the new range and how
//! many rows were released, acquired, created, and bound.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod config;
#[cfg(feature = "kurbo")]
mod geometry;
mod pool;
mod recycled_list;
mod scalar;
mod window;

pub use adapter::ListAdapter;
pub use config::ListConfig;
pub use pool::RowPool;
pub use recycled_list::{ListUpdate, RecycledList, ScrollAlign};
pub use scalar::Scalar;
pub use window::{EdgeSlack, RangeTransition, VisibleRange, compute_visible_range};
