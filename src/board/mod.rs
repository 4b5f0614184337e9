//! The game board.
//!
//! Twenty slots addressed by 1-based position, each holding exactly one
//! square whose own position matches the slot. Slots can be replaced
//! wholesale between games (board design) but never removed.

use serde::{Deserialize, Serialize};

use crate::core::config::BOARD_SIZE;
use crate::core::GameError;
use crate::squares::{
    ChanceSquare, FreeParkingSquare, GoSquare, GoToJailSquare, IncomeTaxSquare, JailSquare,
    PropertySquare, Square, SquareKind,
};

/// An ordered ring of squares.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// The standard layout.
    #[must_use]
    pub fn standard() -> Self {
        let squares: Vec<Square> = vec![
            GoSquare::new(1).into(),
            PropertySquare::new(2, "Central", 800, 90).into(),
            PropertySquare::new(3, "Wan Chai", 700, 65).into(),
            IncomeTaxSquare::new(4).into(),
            PropertySquare::new(5, "Stanley", 600, 60).into(),
            JailSquare::new(6).into(),
            PropertySquare::new(7, "Shek O", 400, 10).into(),
            PropertySquare::new(8, "Mong Kok", 500, 40).into(),
            ChanceSquare::new(9).into(),
            PropertySquare::new(10, "Tsing Yi", 400, 15).into(),
            FreeParkingSquare::new(11).into(),
            PropertySquare::new(12, "Shatin", 700, 75).into(),
            PropertySquare::new(13, "Tuen Mun", 400, 20).into(),
            PropertySquare::new(14, "Tai Po", 500, 25).into(),
            PropertySquare::new(15, "Sai Kung", 400, 10).into(),
            GoToJailSquare::new(16).into(),
            PropertySquare::new(17, "Yuen Long", 400, 25).into(),
            PropertySquare::new(18, "Tai O", 600, 25).into(),
            ChanceSquare::new(19).into(),
            PropertySquare::new(20, "Peak", 850, 100).into(),
        ];

        Self { squares }
    }

    /// A design board: every slot holds an inert placeholder named "Empty".
    #[must_use]
    pub fn blank() -> Self {
        let squares: Vec<Square> = (1..=BOARD_SIZE)
            .map(|position| FreeParkingSquare::named(position, "Empty").into())
            .collect();

        Self { squares }
    }

    /// Number of slots.
    #[must_use]
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    fn slot(position: usize) -> Result<usize, GameError> {
        if (1..=BOARD_SIZE as usize).contains(&position) {
            Ok(position - 1)
        } else {
            Err(GameError::OutOfBounds {
                position,
                size: BOARD_SIZE as usize,
            })
        }
    }

    /// Square at `position`.
    pub fn square(&self, position: usize) -> Result<&Square, GameError> {
        Ok(&self.squares[Self::slot(position)?])
    }

    /// Mutable square at `position`.
    pub fn square_mut(&mut self, position: usize) -> Result<&mut Square, GameError> {
        let slot = Self::slot(position)?;
        Ok(&mut self.squares[slot])
    }

    /// Replace the square at `position`, returning the one it displaced.
    ///
    /// The square must have been built for `position`. On error the board
    /// is unchanged.
    pub fn set_square(&mut self, position: usize, square: impl Into<Square>) -> Result<Square, GameError> {
        let slot = Self::slot(position)?;
        let square = square.into();
        if usize::from(square.position()) != position {
            return Err(GameError::MisplacedSquare {
                position,
                square_position: square.position(),
            });
        }
        Ok(std::mem::replace(&mut self.squares[slot], square))
    }

    /// Squares in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Position of the first Jail square, if the board has one.
    #[must_use]
    pub fn jail_position(&self) -> Option<u8> {
        self.squares
            .iter()
            .find(|s| s.kind() == SquareKind::Jail)
            .map(Square::position)
    }

    /// Forget every owner on the board.
    pub fn release_all(&mut self) {
        for square in &mut self.squares {
            square.release_ownership();
        }
    }

    /// Check the slot invariants of a board that did not come from this
    /// module's constructors (e.g. one decoded from a save).
    pub fn validate(&self) -> Result<(), String> {
        if self.squares.len() != BOARD_SIZE as usize {
            return Err(format!(
                "board has {} squares, expected {}",
                self.squares.len(),
                BOARD_SIZE
            ));
        }
        for (slot, square) in self.squares.iter().enumerate() {
            if usize::from(square.position()) != slot + 1 {
                return Err(format!(
                    "square {:?} at position {} claims position {}",
                    square.name(),
                    slot + 1,
                    square.position()
                ));
            }
        }
        Ok(())
    }
}
