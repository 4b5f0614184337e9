//! Board squares and their effects.
//!
//! Each variant is its own struct implementing [`SquareEffect`]; the
//! [`Square`] enum wraps them for storage and serialization and dispatches
//! to the trait. Effects run against a [`TurnContext`] borrowed from the
//! game.

pub mod chance;
pub mod context;
pub mod go;
pub mod jail;
pub mod property;
pub mod square;

pub use chance::{ChanceSquare, IncomeTaxSquare};
pub use context::TurnContext;
pub use go::GoSquare;
pub use jail::{FreeParkingSquare, GoToJailSquare, JailSquare};
pub use property::PropertySquare;
pub use square::{Square, SquareEffect, SquareKind};
