//! Grid columns and the cell sets a row write touches.

use bitflags::bitflags;

use crate::host::CellSpec;

/// Display class of the header group row.
pub const HEADER_GROUP_CLASS: &str = "GridGroup";

/// Columns shown by the sample grid, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Length,
    SelfTime,
    Calls,
    Recurse,
}

impl Column {
    pub const COUNT: usize = 5;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Name,
        Column::Length,
        Column::SelfTime,
        Column::Calls,
        Column::Recurse,
    ];

    /// Position of the column's cell within a row.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Header caption.
    pub fn caption(self) -> &'static str {
        match self {
            Column::Name => "Samples",
            Column::Length => "Time (ms)",
            Column::SelfTime => "Self (ms)",
            Column::Calls => "Calls",
            Column::Recurse => "Recurse",
        }
    }

    /// Display class of the column's header cell.
    pub fn title_class(self) -> &'static str {
        match self {
            Column::Name => "SampleTitleNameCell",
            Column::Length | Column::SelfTime => "SampleTitleTimeCell",
            Column::Calls | Column::Recurse => "SampleTitleCountCell",
        }
    }

    /// Display class of the column's data cells.
    pub fn cell_class(self) -> &'static str {
        match self {
            Column::Name => "SampleNameCell",
            Column::Length | Column::SelfTime => "SampleTimeCell",
            Column::Calls | Column::Recurse => "SampleCountCell",
        }
    }

    /// Cell specs for the header row.
    pub fn header_cells() -> [CellSpec<'static>; Column::COUNT] {
        Column::ALL.map(|column| CellSpec {
            text: column.caption(),
            class: column.title_class(),
        })
    }

    /// Cell specs for an empty placeholder row.
    pub fn placeholder_cells() -> [CellSpec<'static>; Column::COUNT] {
        Column::ALL.map(|column| CellSpec {
            text: "",
            class: column.cell_class(),
        })
    }
}

bitflags! {
    /// Set of cell properties pushed to the render surface for one row.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFields: u8 {
        const NAME     = 1;
        const COLOUR   = 1 << 1;
        const LENGTH   = 1 << 2;
        const SELF     = 1 << 3;
        const CALLS    = 1 << 4;
        const RECURSE  = 1 << 5;

        /// Values refreshed on every patch pass.
        const TIMINGS  = Self::LENGTH.bits()
            | Self::SELF.bits()
            | Self::CALLS.bits()
            | Self::RECURSE.bits();
        /// Full repaint of a row.
        const ALL      = Self::NAME.bits() | Self::COLOUR.bits() | Self::TIMINGS.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_indices_follow_display_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
    }

    #[test]
    fn header_cells_use_title_classes() {
        let cells = Column::header_cells();
        assert_eq!(cells[0].text, "Samples");
        assert_eq!(cells[0].class, "SampleTitleNameCell");
        assert_eq!(cells[2].text, "Self (ms)");
        assert_eq!(cells[4].class, "SampleTitleCountCell");
    }

    #[test]
    fn placeholder_cells_are_empty() {
        let cells = Column::placeholder_cells();
        assert!(cells.iter().all(|cell| cell.text.is_empty()));
        assert_eq!(cells[1].class, "SampleTimeCell");
    }

    #[test]
    fn timings_exclude_name_and_colour() {
        assert!(!CellFields::TIMINGS.contains(CellFields::NAME));
        assert!(!CellFields::TIMINGS.contains(CellFields::COLOUR));
        assert!(CellFields::ALL.contains(CellFields::TIMINGS));
    }
}
