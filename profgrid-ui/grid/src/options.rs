use crate::host::Rect;

/// Five non-breaking spaces per tree level.
const DEFAULT_INDENT_UNIT: &str = "\u{a0}\u{a0}\u{a0}\u{a0}\u{a0}";

/// Configuration knobs that influence how a grid view is placed and drawn.
#[derive(Clone, Debug)]
pub struct GridViewOptions {
    /// Gap kept between the window and its neighbours.
    pub margin: f32,
    /// Horizontal distance between two adjacent window slots.
    pub slot_stride: f32,
    /// Fixed window width applied on every resize.
    pub window_width: f32,
    /// Bounds the window is created with, before the first resize.
    pub initial_bounds: Rect,
    /// Duration, in seconds, of the horizontal slide started by
    /// `set_x_pos`.
    pub tween_duration: f32,
    /// Prefix repeated once per tree level in front of entry names.
    pub indent_unit: String,
    /// Whether the window is shown right after construction.
    pub start_visible: bool,
}

impl GridViewOptions {
    /// Horizontal position of the given window slot.
    #[inline]
    pub fn slot_x(&self, slot: u32) -> f32 {
        self.margin + slot as f32 * self.slot_stride
    }
}

impl Default for GridViewOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            slot_stride: 410.0,
            window_width: 400.0,
            initial_bounds: Rect::new(100.0, 100.0, 100.0, 100.0),
            tween_duration: 0.25,
            indent_unit: String::from(DEFAULT_INDENT_UNIT),
            start_visible: true,
        }
    }
}
