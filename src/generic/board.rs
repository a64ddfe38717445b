use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Coordinates, DecodeError, ErrorKind, Field};

/// The 3x3 grid of fields, addressed by a flat index:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The board only stores fields. Whose turn it is and whether a field may be
/// overwritten is decided by the [`crate::Session`] driving it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    data: Array2<Field>,
}

#[derive(Deserialize)]
struct BoardData {
    data: Array2<Field>,
}

impl TryFrom<BoardData> for Board {
    type Error = DecodeError;

    fn try_from(board_data: BoardData) -> Result<Self, Self::Error> {
        if board_data.data.dim() != Self::SIZE {
            return Err(DecodeError::InvalidShape {
                shape: board_data.data.shape().to_vec(),
            });
        }
        Ok(Self {
            data: board_data.data,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const CELLS: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
        }
    }

    /// Builds a board from fields in index order.
    pub fn from_fields(fields: [Field; Board::CELLS]) -> Self {
        Self {
            data: Array2::from_shape_fn((Self::SIZE.0, Self::SIZE.1), |(row, column)| {
                fields[row * Self::SIZE.1 + column]
            }),
        }
    }

    fn coordinates(index: usize) -> Result<Coordinates, ErrorKind> {
        if index >= Self::CELLS {
            return Err(ErrorKind::IndexOutOfRange { index });
        }
        Ok((index / Self::SIZE.1, index % Self::SIZE.1))
    }

    pub fn get(&self, index: usize) -> Result<Field, ErrorKind> {
        let coordinates = Self::coordinates(index)?;
        Ok(self.data[coordinates])
    }

    /// Overwrites the field at `index`, occupied or not.
    pub fn set(&mut self, index: usize, field: Field) -> Result<(), ErrorKind> {
        let coordinates = Self::coordinates(index)?;
        debug!("setting field {} to {:?}", index, field);
        self.data[coordinates] = field;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|field| !field.is_vacant())
    }

    pub fn reset(&mut self) {
        self.data.fill(Field::Vacant);
    }

    /// All fields in index order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.data.iter().copied()
    }

    pub fn vacant_indices(&self) -> Vec<usize> {
        self.fields()
            .positions(|field| field.is_vacant())
            .collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .data
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Field::symbol).join(" "))
            .join("\n");
        write!(f, "{}", rendered)
    }
}
