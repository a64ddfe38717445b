use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::DecodeError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// left to right
    Row,
    /// top to bottom
    Column,
    /// top to bottom, starting in a corner
    Diagonal,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Row => write!(f, "row"),
            Orientation::Column => write!(f, "column"),
            Orientation::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Three cells that win the game when a single player holds all of them.
///
/// [`Line::orientation`] together with [`Line::start`] tells the lines apart, which is
/// all a front end needs to place a strike-through.
///
/// Only the entries of [`LINES`] exist, deserializing anything else fails.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "LineData")]
pub struct Line {
    orientation: Orientation,
    cells: [usize; 3],
}

#[derive(Deserialize)]
struct LineData {
    orientation: Orientation,
    cells: [usize; 3],
}

impl TryFrom<LineData> for Line {
    type Error = DecodeError;

    fn try_from(line_data: LineData) -> Result<Self, Self::Error> {
        let line = Line::new(line_data.orientation, line_data.cells);
        if LINES.contains(&line) {
            Ok(line)
        } else {
            Err(DecodeError::UnknownLine {
                cells: line_data.cells,
            })
        }
    }
}

impl Line {
    const fn new(orientation: Orientation, cells: [usize; 3]) -> Self {
        Self { orientation, cells }
    }

    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The three cell indices, ascending.
    pub const fn cells(&self) -> [usize; 3] {
        self.cells
    }

    /// The lowest index of the line: 0, 3 or 6 for rows, 0, 1 or 2 for columns,
    /// 0 or 2 for diagonals.
    pub const fn start(&self) -> usize {
        self.cells[0]
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} starting at {}", self.orientation, self.start())
    }
}

/// Every winning line, in the order they are checked: rows top to bottom,
/// columns left to right, then the main and the anti diagonal.
pub const LINES: [Line; 8] = [
    Line::new(Orientation::Row, [0, 1, 2]),
    Line::new(Orientation::Row, [3, 4, 5]),
    Line::new(Orientation::Row, [6, 7, 8]),
    Line::new(Orientation::Column, [0, 3, 6]),
    Line::new(Orientation::Column, [1, 4, 7]),
    Line::new(Orientation::Column, [2, 5, 8]),
    Line::new(Orientation::Diagonal, [0, 4, 8]),
    Line::new(Orientation::Diagonal, [2, 4, 6]),
];
