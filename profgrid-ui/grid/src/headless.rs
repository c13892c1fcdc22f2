//! In-memory window host and render surface.
//!
//! [`HeadlessHost`] keeps window geometry, grid rows and node content in plain
//! vectors and counts every render write. It backs the `profgrid` replay tool
//! and the tests of this crate.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::error::HostError;
use crate::host::{
    CellSpec, NodeId, Rect, RenderSurface, RowNodes, WindowHost, WindowId,
};

/// A [`HeadlessHost`] shared between several views.
pub type SharedHost = Rc<RefCell<HeadlessHost>>;

/// Counters of render surface writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteStats {
    pub text_writes: usize,
    pub colour_writes: usize,
    pub visibility_writes: usize,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.text_writes + self.colour_writes + self.visibility_writes
    }
}

/// Content of a single render node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessNode {
    pub text: String,
    pub colour: Option<String>,
    pub class: String,
    pub visible: bool,
}

/// State of one headless window.
#[derive(Clone, Debug, Default)]
pub struct HeadlessWindow {
    pub name: String,
    pub bounds: Rect,
    pub visible: bool,
    pub closed: bool,
    pub header: Option<RowNodes>,
    pub rows: Vec<RowNodes>,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    windows: Vec<HeadlessWindow>,
    nodes: Vec<HeadlessNode>,
    stats: WriteStats,
    window_limit: Option<usize>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new host for sharing between views.
    pub fn shared() -> SharedHost {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Reject window creation once `limit` windows exist.
    pub fn with_window_limit(mut self, limit: usize) -> Self {
        self.window_limit = Some(limit);
        self
    }

    pub fn window(&self, window: WindowId) -> Option<&HeadlessWindow> {
        self.windows.get(window.0 as usize)
    }

    pub fn node(&self, node: NodeId) -> Option<&HeadlessNode> {
        self.nodes.get(node.0 as usize)
    }

    /// Text of a node, empty for unknown nodes.
    pub fn text(&self, node: NodeId) -> &str {
        self.node(node).map_or("", |node| node.text.as_str())
    }

    pub fn stats(&self) -> WriteStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = WriteStats::default();
    }

    /// Cell texts of the visible child rows of a window, in row order.
    pub fn visible_rows(&self, window: WindowId) -> Vec<Vec<String>> {
        let Some(window) = self.window(window) else {
            return Vec::new();
        };

        window
            .rows
            .iter()
            .filter(|row| self.node(row.row).is_some_and(|node| node.visible))
            .map(|row| self.row_texts(row))
            .collect()
    }

    /// Cell texts of the header row of a window.
    pub fn header_texts(&self, window: WindowId) -> Vec<String> {
        self.window(window)
            .and_then(|window| window.header.as_ref())
            .map(|header| self.row_texts(header))
            .unwrap_or_default()
    }

    fn row_texts(&self, row: &RowNodes) -> Vec<String> {
        row.cells
            .iter()
            .map(|cell| self.text(*cell).to_owned())
            .collect()
    }

    fn window_mut(&mut self, window: WindowId) -> Option<&mut HeadlessWindow> {
        let found = self.windows.get_mut(window.0 as usize);
        if found.is_none() {
            warn!("headless host: unknown window {}", window.0);
        }
        found
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut HeadlessNode> {
        let found = self.nodes.get_mut(node.0 as usize);
        if found.is_none() {
            warn!("headless host: unknown node {}", node.0);
        }
        found
    }

    fn alloc_node(&mut self, text: &str, class: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(HeadlessNode {
            text: text.to_owned(),
            colour: None,
            class: class.to_owned(),
            visible: true,
        });
        id
    }

    fn alloc_row(&mut self, class: &str, cells: &[CellSpec<'_>]) -> RowNodes {
        let row = self.alloc_node("", class);
        let cells = cells
            .iter()
            .map(|cell| self.alloc_node(cell.text, cell.class))
            .collect();
        RowNodes { row, cells }
    }
}

impl WindowHost for HeadlessHost {
    fn create_window(
        &mut self,
        name: &str,
        bounds: Rect,
    ) -> Result<WindowId, HostError> {
        if name.is_empty() {
            return Err(HostError::EmptyWindowName);
        }
        if let Some(limit) = self.window_limit {
            if self.windows.len() >= limit {
                return Err(HostError::WindowLimit { limit });
            }
        }

        let id = WindowId(self.windows.len() as u32);
        self.windows.push(HeadlessWindow {
            name: name.to_owned(),
            bounds,
            ..HeadlessWindow::default()
        });
        Ok(id)
    }

    fn show(&mut self, window: WindowId) {
        if let Some(window) = self.window_mut(window) {
            window.visible = true;
        }
    }

    fn hide(&mut self, window: WindowId) {
        if let Some(window) = self.window_mut(window) {
            window.visible = false;
        }
    }

    fn set_position(&mut self, window: WindowId, x: f32, y: f32) {
        if let Some(window) = self.window_mut(window) {
            window.bounds.x = x;
            window.bounds.y = y;
        }
    }

    fn set_size(&mut self, window: WindowId, width: f32, height: f32) {
        if let Some(window) = self.window_mut(window) {
            window.bounds.width = width;
            window.bounds.height = height;
        }
    }

    fn close(&mut self, window: WindowId) {
        if let Some(window) = self.window_mut(window) {
            window.visible = false;
            window.closed = true;
        }
    }

    fn add_header_row(
        &mut self,
        window: WindowId,
        group_class: &str,
        cells: &[CellSpec<'_>],
    ) -> RowNodes {
        let header = self.alloc_row(group_class, cells);
        if let Some(window) = self.window_mut(window) {
            window.header = Some(header.clone());
        }
        header
    }

    fn clear_rows(&mut self, window: WindowId) {
        if let Some(window) = self.window_mut(window) {
            window.rows.clear();
        }
    }

    fn append_row(
        &mut self,
        window: WindowId,
        cells: &[CellSpec<'_>],
    ) -> RowNodes {
        let row = self.alloc_row("", cells);
        if let Some(window) = self.window_mut(window) {
            window.rows.push(row.clone());
        }
        row
    }
}

impl RenderSurface for HeadlessHost {
    fn set_text(&mut self, node: NodeId, text: &str) {
        self.stats.text_writes += 1;
        if let Some(node) = self.node_mut(node) {
            node.text.clear();
            node.text.push_str(text);
        }
    }

    fn set_colour(&mut self, node: NodeId, colour: &str) {
        self.stats.colour_writes += 1;
        if let Some(node) = self.node_mut(node) {
            node.colour = Some(colour.to_owned());
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.stats.visibility_writes += 1;
        if let Some(node) = self.node_mut(node) {
            node.visible = visible;
        }
    }
}
