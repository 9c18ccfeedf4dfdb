//! The fixed layout of lines on a board of a given size.
//!
//! Lines are numbered rows first, then columns, then `\` diagonals, then `/` diagonals.
//! Diagonals shorter than 3 spaces can never contain a flip, so they are left out.

use crate::MAX_EDGE_LENGTH;
use arrayvec::ArrayVec;
use derive_more::{Display, From, Into};

/// The number of lines tracked on a board with edge length `n`: `n` rows, `n` columns,
/// and `2n - 1` diagonals in each direction, minus the 8 diagonals with fewer than 3 spaces.
pub const fn line_count(n: usize) -> usize {
    2 * n + 2 * (2 * n - 1) - 8
}

/// Identifies one line on a board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, From, Into, Display)]
pub struct LineId(u8);

impl LineId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The orientation of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    Row,
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Distance in cell indexes between neighbouring spaces of a line.
    #[inline]
    pub fn stride(self, edge_length: usize) -> isize {
        let n = edge_length as isize;
        match self {
            LineKind::Row => 1,
            LineKind::Column => n,
            LineKind::Diagonal => n + 1,
            LineKind::AntiDiagonal => n - 1,
        }
    }
}

/// Membership of one cell in one line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineSlot {
    pub line: LineId,
    /// Position of the cell inside the line.
    pub offset: u8,
    pub kind: LineKind,
}

/// A line and the cells it runs through, in offset order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub cells: ArrayVec<u8, MAX_EDGE_LENGTH>,
}

/// Every line on a board, and the lines through every cell.
#[derive(Clone, Debug)]
pub struct Topology {
    edge_length: usize,
    lines: Vec<Line>,
    slots: Vec<ArrayVec<LineSlot, 4>>,
}

impl Topology {
    /// Lay out the lines for a board with the given edge length.
    /// Panics if the edge length is outside the supported range.
    pub fn new(edge_length: usize) -> Self {
        assert!((crate::MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&edge_length));
        let n = edge_length;

        let mut topology = Self {
            edge_length: n,
            lines: Vec::with_capacity(line_count(n)),
            slots: vec![ArrayVec::new(); n * n],
        };

        for row in 0..n {
            topology.add_line(LineKind::Row, (row, 0));
        }
        for col in 0..n {
            topology.add_line(LineKind::Column, (0, col));
        }

        // `\` diagonals: up the first column from the third-lowest row, then along the top row.
        for row in (1..=n - 3).rev() {
            topology.add_line(LineKind::Diagonal, (row, 0));
        }
        for col in 0..=n - 3 {
            topology.add_line(LineKind::Diagonal, (0, col));
        }

        // `/` diagonals: along the top row from the third column, then down the last column.
        for col in 2..n - 1 {
            topology.add_line(LineKind::AntiDiagonal, (0, col));
        }
        for row in 0..=n - 3 {
            topology.add_line(LineKind::AntiDiagonal, (row, n - 1));
        }

        debug_assert_eq!(topology.lines.len(), line_count(n));
        topology
    }

    /// Walk a line from its first space and register it with every cell it crosses.
    fn add_line(&mut self, kind: LineKind, start: (usize, usize)) {
        let n = self.edge_length;
        let id = LineId(self.lines.len() as u8);
        let (row_step, col_step): (isize, isize) = match kind {
            LineKind::Row => (0, 1),
            LineKind::Column => (1, 0),
            LineKind::Diagonal => (1, 1),
            LineKind::AntiDiagonal => (1, -1),
        };

        let mut cells = ArrayVec::new();
        let (mut row, mut col) = (start.0 as isize, start.1 as isize);
        while (0..n as isize).contains(&row) && (0..n as isize).contains(&col) {
            let cell = row as usize * n + col as usize;
            self.slots[cell].push(LineSlot {
                line: id,
                offset: cells.len() as u8,
                kind,
            });
            cells.push(cell as u8);
            row += row_step;
            col += col_step;
        }

        debug_assert!(cells.len() >= 3);
        self.lines.push(Line { kind, cells });
    }

    #[inline]
    pub fn edge_length(&self) -> usize {
        self.edge_length
    }

    #[inline]
    pub fn num_spaces(&self) -> usize {
        self.edge_length * self.edge_length
    }

    #[inline]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// The line holding row `row`.
    #[inline]
    pub fn row(&self, row: usize) -> LineId {
        LineId(row as u8)
    }

    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| (LineId(index as u8), line))
    }

    /// Every line through `cell`, ordered row, column, `\`, `/`.
    #[inline]
    pub fn slots(&self, cell: usize) -> &[LineSlot] {
        &self.slots[cell]
    }
}
