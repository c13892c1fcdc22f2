//! Row arena and the id index over it.
//!
//! Rows live in a flat vector addressed by slot. The slot order matches the
//! pre-order walk of the last structural update. The id index maps an entry
//! id to its slot and is rebuilt wholesale on every structural change.

use std::collections::HashMap;

use profgrid_ui_tree::EntryId;

use crate::cells::Column;
use crate::host::{NodeId, RowNodes};

/// Values last written to a row, kept for change detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellData {
    /// Entry currently rendered by the row, `None` for placeholders.
    pub id: Option<EntryId>,
    /// Entry name without indentation.
    pub name: String,
}

/// One pre-allocated grid row.
#[derive(Clone, Debug)]
pub struct GridRow {
    slot: usize,
    cell_data: CellData,
    nodes: RowNodes,
    visible: bool,
}

impl GridRow {
    fn placeholder(slot: usize, nodes: RowNodes) -> Self {
        Self {
            slot,
            cell_data: CellData::default(),
            nodes,
            visible: true,
        }
    }

    /// Position of the row within the grid.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn cell_data(&self) -> &CellData {
        &self.cell_data
    }

    pub fn id(&self) -> Option<EntryId> {
        self.cell_data.id
    }

    pub fn name(&self) -> &str {
        &self.cell_data.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Node backing the whole row element.
    pub fn row_node(&self) -> NodeId {
        self.nodes.row
    }

    /// Node backing the given column's cell, if the host provided one.
    pub fn cell_node(&self, column: Column) -> Option<NodeId> {
        self.nodes.cells.get(column.index()).copied()
    }

    pub(crate) fn cell_data_mut(&mut self) -> &mut CellData {
        &mut self.cell_data
    }

    /// Record a visibility change. Returns `true` when the state flipped.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// Growth-only arena of rows plus the entry id index.
#[derive(Debug, Default)]
pub(crate) struct RowPool {
    rows: Vec<GridRow>,
    id_index: HashMap<EntryId, usize>,
}

impl RowPool {
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut GridRow> {
        self.rows.get_mut(slot)
    }

    /// Drop every row and its index, then allocate placeholders through
    /// `allocate`, one call per slot.
    pub(crate) fn rebuild(
        &mut self,
        count: usize,
        mut allocate: impl FnMut(usize) -> RowNodes,
    ) {
        self.id_index.clear();
        self.rows.clear();
        self.rows.reserve(count);
        for slot in 0..count {
            self.rows.push(GridRow::placeholder(slot, allocate(slot)));
        }
    }

    pub(crate) fn clear_index(&mut self) {
        self.id_index.clear();
    }

    pub(crate) fn index_row(&mut self, id: EntryId, slot: usize) {
        self.id_index.insert(id, slot);
    }

    pub(crate) fn slot_of(&self, id: EntryId) -> Option<usize> {
        self.id_index.get(&id).copied()
    }

    pub(crate) fn row_for(&self, id: EntryId) -> Option<&GridRow> {
        self.slot_of(id).and_then(|slot| self.rows.get(slot))
    }

    pub(crate) fn tail_mut(&mut self, from: usize) -> &mut [GridRow] {
        let from = from.min(self.rows.len());
        &mut self.rows[from..]
    }
}
