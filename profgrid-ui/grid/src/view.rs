//! Hierarchical grid view that reconciles rows against sample snapshots.
//!
//! Every refresh the caller hands over a snapshot, the total entry count and
//! a layout digest. [`HierarchicalGridView::update_entries`] then picks the
//! cheapest path that keeps the grid correct:
//! - nothing, when the view is hidden or the snapshot is the one already shown;
//! - a structural rebuild, when the digest changed: rows are reassigned in
//!   pre-order, the id index is rebuilt and leftover rows are hidden;
//! - a patch, when the digest matches: rows are found through the id index
//!   and only timing cells (plus renamed entries) are rewritten.

use std::rc::Rc;

use log::{debug, trace, warn};
use profgrid_ui_tree::{EntryId, LayoutDigest, SampleEntry, Snapshot};

use crate::cells::{CellFields, Column, HEADER_GROUP_CLASS};
use crate::error::{GridError, Result};
use crate::host::{Rect, RenderSurface, RowNodes, WindowHost, WindowId};
use crate::options::GridViewOptions;
use crate::rows::{GridRow, RowPool};
use crate::tween::Tween;

/// What a call to [`HierarchicalGridView::update_entries`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The view is hidden; nothing was touched.
    Hidden,
    /// The snapshot is the one processed last time.
    Unchanged,
    /// The layout changed and `rows` rows were reassigned.
    Rebuilt { rows: usize },
    /// The layout is unchanged; `rows` rows were patched and `missed` entries
    /// had no indexed row.
    Patched { rows: usize, missed: usize },
}

/// Horizontal slide started by `set_x_pos`, with the neighbour bounds it was
/// started against.
#[derive(Clone, Copy, Debug)]
struct Slide {
    tween: Tween,
    top: Rect,
    bottom: Rect,
}

/// Grid window listing a profiling sample tree, one row per entry.
pub struct HierarchicalGridView<H: WindowHost, S: RenderSurface> {
    host: H,
    surface: S,
    options: GridViewOptions,
    window: WindowId,
    header: RowNodes,
    visible: bool,
    x_pos: f32,
    slide: Option<Slide>,
    entry_count: usize,
    layout_digest: Option<LayoutDigest>,
    last_entries: Option<Snapshot>,
    rows: RowPool,
}

impl<H: WindowHost, S: RenderSurface> HierarchicalGridView<H, S> {
    /// Create the window in the given horizontal slot and attach the grid
    /// header.
    pub fn new(
        mut host: H,
        surface: S,
        name: &str,
        offset: u32,
        options: GridViewOptions,
    ) -> Result<Self> {
        let window = host
            .create_window(name, options.initial_bounds)
            .map_err(|source| GridError::CreateWindow {
                name: name.to_owned(),
                source,
            })?;

        let visible = options.start_visible;
        if visible {
            host.show(window);
        }

        let header = host.add_header_row(
            window,
            HEADER_GROUP_CLASS,
            &Column::header_cells(),
        );
        debug!("grid window `{name}` created in slot {offset}");

        Ok(Self {
            x_pos: options.slot_x(offset),
            host,
            surface,
            options,
            window,
            header,
            visible,
            slide: None,
            entry_count: 0,
            layout_digest: None,
            last_entries: None,
            rows: RowPool::default(),
        })
    }

    // --- Read access ---

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn header(&self) -> &RowNodes {
        &self.header
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current horizontal window position.
    pub fn x_pos(&self) -> f32 {
        self.x_pos
    }

    /// Whether a horizontal slide is still running.
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Number of rows allocated so far. Never decreases.
    pub fn allocated_rows(&self) -> usize {
        self.entry_count
    }

    pub fn layout_digest(&self) -> Option<&LayoutDigest> {
        self.layout_digest.as_ref()
    }

    /// All allocated rows in slot order, hidden ones included.
    pub fn rows(&self) -> &[GridRow] {
        self.rows.rows()
    }

    /// Row currently indexed for the given entry.
    pub fn row_for(&self, id: EntryId) -> Option<&GridRow> {
        self.rows.row_for(id)
    }

    pub fn visible_row_count(&self) -> usize {
        self.rows.rows().iter().filter(|row| row.is_visible()).count()
    }

    // --- Window control ---

    /// Show or hide the window without animation.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }

        if visible {
            self.host.show(self.window);
        } else {
            self.host.hide(self.window);
        }
        self.visible = visible;
    }

    /// Start sliding the window to the given horizontal slot.
    ///
    /// A slide already in progress is replaced and continues from the
    /// current position.
    pub fn set_x_pos(&mut self, slot: u32, top: Rect, bottom: Rect) {
        let target = self.options.slot_x(slot);
        trace!("grid slide {} -> {target}", self.x_pos);
        self.slide = Some(Slide {
            tween: Tween::new(self.x_pos, target, self.options.tween_duration),
            top,
            bottom,
        });
    }

    /// Advance a running slide by `dt` seconds.
    ///
    /// Returns `true` while the slide is still in progress.
    pub fn animate(&mut self, dt: f32) -> bool {
        let Some(slide) = self.slide.as_mut() else {
            return false;
        };

        self.x_pos = slide.tween.step(dt);
        let (top, bottom) = (slide.top, slide.bottom);
        if slide.tween.is_finished() {
            self.slide = None;
        }

        self.window_resized(&top, &bottom);
        self.slide.is_some()
    }

    /// Fit the window between the bottom of `top` and the top of `bottom`.
    pub fn window_resized(&mut self, top: &Rect, bottom: &Rect) {
        let margin = self.options.margin;
        let top_y = top.bottom() + margin;
        let height = (bottom.y - margin - top_y).max(0.0);
        self.host.set_position(self.window, self.x_pos, top_y);
        self.host
            .set_size(self.window, self.options.window_width, height);
    }

    /// Close the window.
    pub fn close(mut self) {
        self.host.close(self.window);
    }

    // --- Updates ---

    /// Reconcile the grid against a new snapshot.
    ///
    /// `entry_count` is the total number of nodes in `entries`, nested
    /// children included. `layout_digest` must change whenever entry ids or
    /// their order change.
    pub fn update_entries(
        &mut self,
        entry_count: usize,
        layout_digest: &LayoutDigest,
        entries: &Snapshot,
    ) -> UpdateOutcome {
        if !self.visible {
            return UpdateOutcome::Hidden;
        }

        if self
            .last_entries
            .as_ref()
            .is_some_and(|last| Rc::ptr_eq(last, entries))
        {
            return UpdateOutcome::Unchanged;
        }
        self.last_entries = Some(Rc::clone(entries));

        if entry_count > self.entry_count {
            self.grow(entry_count);
        }

        if self.layout_digest.as_ref() != Some(layout_digest) {
            let rows = self.rebuild(entries);
            self.layout_digest = Some(layout_digest.clone());
            UpdateOutcome::Rebuilt { rows }
        } else {
            let mut pass = Pass::new(
                &mut self.rows,
                &mut self.surface,
                &self.options.indent_unit,
            );
            pass.patch_level(entries, "");
            trace!(
                "grid patched {} rows, {} index misses",
                pass.touched, pass.missed
            );
            UpdateOutcome::Patched {
                rows: pass.touched,
                missed: pass.missed,
            }
        }
    }

    /// Replace the row pool with `count` placeholders.
    ///
    /// Rows of the old pool are gone, so the stored digest is dropped too
    /// and the same update falls through to a rebuild.
    fn grow(&mut self, count: usize) {
        debug!("grid rows grow {} -> {count}", self.entry_count);
        let (host, window) = (&mut self.host, self.window);
        host.clear_rows(window);
        let cells = Column::placeholder_cells();
        self.rows.rebuild(count, |_| host.append_row(window, &cells));
        self.entry_count = count;
        self.layout_digest = None;
    }

    fn rebuild(&mut self, entries: &[SampleEntry]) -> usize {
        self.rows.clear_index();
        let mut pass = Pass::new(
            &mut self.rows,
            &mut self.surface,
            &self.options.indent_unit,
        );
        pass.rebuild_level(entries, "");
        let (claimed, overflow) = (pass.next_slot, pass.missed);

        if overflow > 0 {
            warn!(
                "grid snapshot has {overflow} entries beyond {} allocated rows",
                self.entry_count
            );
        }

        let surface = &mut self.surface;
        for row in self.rows.tail_mut(claimed) {
            if row.set_visible(false) {
                surface.set_visible(row.row_node(), false);
            }
        }

        let assigned = claimed.min(self.rows.len());
        debug!("grid rebuilt with {assigned} rows");
        assigned
    }
}

/// One pre-order walk over a snapshot, shared by both update paths.
struct Pass<'a, S: RenderSurface> {
    rows: &'a mut RowPool,
    surface: &'a mut S,
    indent_unit: &'a str,
    next_slot: usize,
    touched: usize,
    missed: usize,
}

impl<'a, S: RenderSurface> Pass<'a, S> {
    fn new(
        rows: &'a mut RowPool,
        surface: &'a mut S,
        indent_unit: &'a str,
    ) -> Self {
        Self {
            rows,
            surface,
            indent_unit,
            next_slot: 0,
            touched: 0,
            missed: 0,
        }
    }

    /// Claim the next slot for every entry, parent before children.
    fn rebuild_level(&mut self, entries: &[SampleEntry], indent: &str) {
        let child_indent = format!("{indent}{}", self.indent_unit);
        for entry in entries {
            let slot = self.next_slot;
            self.next_slot += 1;

            if let Some(row) = self.rows.get_mut(slot) {
                if row.set_visible(true) {
                    self.surface.set_visible(row.row_node(), true);
                }

                let data = row.cell_data_mut();
                data.id = Some(entry.id);
                data.name.clone_from(&entry.name);
                write_cells(
                    &mut *self.surface,
                    row,
                    entry,
                    indent,
                    CellFields::ALL,
                );

                self.rows.index_row(entry.id, slot);
                self.touched += 1;
            } else {
                self.missed += 1;
            }

            self.rebuild_level(&entry.children, &child_indent);
        }
    }

    /// Refresh rows found through the id index.
    fn patch_level(&mut self, entries: &[SampleEntry], indent: &str) {
        let child_indent = format!("{indent}{}", self.indent_unit);
        for entry in entries {
            let row = match self.rows.slot_of(entry.id) {
                Some(slot) => self.rows.get_mut(slot),
                None => None,
            };

            match row {
                Some(row) => {
                    let mut fields = CellFields::TIMINGS;
                    // Names switch from a hashed placeholder to the resolved
                    // name once; only rewrite them then.
                    if row.name() != entry.name {
                        row.cell_data_mut().name.clone_from(&entry.name);
                        fields |= CellFields::NAME;
                    }
                    write_cells(
                        &mut *self.surface,
                        row,
                        entry,
                        indent,
                        fields,
                    );
                    self.touched += 1;
                },
                None => {
                    trace!("grid entry {} has no indexed row", entry.id);
                    self.missed += 1;
                },
            }

            self.patch_level(&entry.children, &child_indent);
        }
    }
}

fn write_cells<S: RenderSurface>(
    surface: &mut S,
    row: &GridRow,
    entry: &SampleEntry,
    indent: &str,
    fields: CellFields,
) {
    let mut put = |column: Column, text: &str| {
        if let Some(node) = row.cell_node(column) {
            surface.set_text(node, text);
        }
    };

    if fields.contains(CellFields::NAME) {
        put(Column::Name, &format!("{indent}{}", entry.name));
    }
    if fields.contains(CellFields::LENGTH) {
        put(Column::Length, &entry.ms_length.to_string());
    }
    if fields.contains(CellFields::SELF) {
        put(Column::SelfTime, &entry.ms_self.to_string());
    }
    if fields.contains(CellFields::CALLS) {
        put(Column::Calls, &entry.call_count.to_string());
    }
    if fields.contains(CellFields::RECURSE) {
        put(Column::Recurse, &entry.recurse_depth.to_string());
    }

    if fields.contains(CellFields::COLOUR) {
        if let Some(node) = row.cell_node(Column::Name) {
            surface.set_colour(node, &entry.colour);
        }
    }
}
