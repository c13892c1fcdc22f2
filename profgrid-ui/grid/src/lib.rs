//! Incrementally updated grid view for profiling sample trees.
//!
//! The crate is split into:
//! - contracts for the collaborators the view drives ([`WindowHost`] and
//!   [`RenderSurface`]);
//! - the [`HierarchicalGridView`] itself, which owns a growth-only pool of
//!   rows and an id index over it;
//! - a [`HeadlessHost`] implementing both contracts in memory.
//!
//! A refresh tick usually looks like this:
//!
//! ```
//! use std::rc::Rc;
//!
//! use profgrid_ui_grid::{
//!     GridViewOptions, HeadlessHost, HierarchicalGridView, UpdateOutcome,
//! };
//! use profgrid_ui_tree::{LayoutDigest, SampleEntry, Snapshot, count_entries};
//!
//! let host = HeadlessHost::shared();
//! let mut view = HierarchicalGridView::new(
//!     host.clone(),
//!     host.clone(),
//!     "Main Thread",
//!     0,
//!     GridViewOptions::default(),
//! )
//! .expect("window");
//!
//! let snapshot: Snapshot = Rc::from(vec![
//!     SampleEntry::new(1, "frame").with_timing(16.6, 0.4),
//! ]);
//! let digest = LayoutDigest::from("frame-v1");
//!
//! let outcome =
//!     view.update_entries(count_entries(&snapshot), &digest, &snapshot);
//! assert_eq!(outcome, UpdateOutcome::Rebuilt { rows: 1 });
//! assert_eq!(
//!     view.update_entries(1, &digest, &snapshot),
//!     UpdateOutcome::Unchanged
//! );
//! ```

mod cells;
mod error;
mod headless;
mod host;
mod options;
mod rows;
mod tween;
mod view;

pub use cells::{CellFields, Column, HEADER_GROUP_CLASS};
pub use error::{GridError, HostError, Result};
pub use headless::{
    HeadlessHost, HeadlessNode, HeadlessWindow, SharedHost, WriteStats,
};
pub use host::{
    CellSpec, NodeId, Rect, RenderSurface, RowNodes, WindowHost, WindowId,
};
pub use options::GridViewOptions;
pub use rows::{CellData, GridRow};
pub use tween::Tween;
pub use view::{HierarchicalGridView, UpdateOutcome};
