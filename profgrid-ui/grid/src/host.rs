//! Contracts for the two collaborators a grid view drives.
//!
//! A [`WindowHost`] owns windows and the generic row-based grid control hosted
//! inside them. A [`RenderSurface`] writes content into the nodes that back
//! those rows. Both are single-threaded; several views usually share one host
//! through `Rc<RefCell<_>>`, for which blanket implementations are provided.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::HostError;

/// Handle of a window created by a [`WindowHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

/// Handle of a render node (a row element or one of its cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Axis-aligned window bounds in host units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Vertical coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Content and display class of one cell in an appended row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpec<'a> {
    pub text: &'a str,
    pub class: &'a str,
}

/// Nodes backing one grid row: the row element and its cells in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowNodes {
    pub row: NodeId,
    pub cells: Vec<NodeId>,
}

/// Window management and grid control primitives.
pub trait WindowHost {
    /// Create a window. Windows start hidden.
    fn create_window(
        &mut self,
        name: &str,
        bounds: Rect,
    ) -> Result<WindowId, HostError>;

    /// Show a window without animation.
    fn show(&mut self, window: WindowId);

    /// Hide a window without animation.
    fn hide(&mut self, window: WindowId);

    fn set_position(&mut self, window: WindowId, x: f32, y: f32);

    fn set_size(&mut self, window: WindowId, width: f32, height: f32);

    fn close(&mut self, window: WindowId);

    /// Add the grid's group header row.
    fn add_header_row(
        &mut self,
        window: WindowId,
        group_class: &str,
        cells: &[CellSpec<'_>],
    ) -> RowNodes;

    /// Remove every child row below the header.
    fn clear_rows(&mut self, window: WindowId);

    /// Append a child row below the header. Appended rows are visible.
    fn append_row(&mut self, window: WindowId, cells: &[CellSpec<'_>])
    -> RowNodes;
}

/// Content writes into render nodes.
pub trait RenderSurface {
    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_colour(&mut self, node: NodeId, colour: &str);

    fn set_visible(&mut self, node: NodeId, visible: bool);
}

impl<T: WindowHost + ?Sized> WindowHost for Rc<RefCell<T>> {
    fn create_window(
        &mut self,
        name: &str,
        bounds: Rect,
    ) -> Result<WindowId, HostError> {
        self.borrow_mut().create_window(name, bounds)
    }

    fn show(&mut self, window: WindowId) {
        self.borrow_mut().show(window);
    }

    fn hide(&mut self, window: WindowId) {
        self.borrow_mut().hide(window);
    }

    fn set_position(&mut self, window: WindowId, x: f32, y: f32) {
        self.borrow_mut().set_position(window, x, y);
    }

    fn set_size(&mut self, window: WindowId, width: f32, height: f32) {
        self.borrow_mut().set_size(window, width, height);
    }

    fn close(&mut self, window: WindowId) {
        self.borrow_mut().close(window);
    }

    fn add_header_row(
        &mut self,
        window: WindowId,
        group_class: &str,
        cells: &[CellSpec<'_>],
    ) -> RowNodes {
        self.borrow_mut().add_header_row(window, group_class, cells)
    }

    fn clear_rows(&mut self, window: WindowId) {
        self.borrow_mut().clear_rows(window);
    }

    fn append_row(
        &mut self,
        window: WindowId,
        cells: &[CellSpec<'_>],
    ) -> RowNodes {
        self.borrow_mut().append_row(window, cells)
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for Rc<RefCell<T>> {
    fn set_text(&mut self, node: NodeId, text: &str) {
        self.borrow_mut().set_text(node, text);
    }

    fn set_colour(&mut self, node: NodeId, colour: &str) {
        self.borrow_mut().set_colour(node, colour);
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        self.borrow_mut().set_visible(node, visible);
    }
}
